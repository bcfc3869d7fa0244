use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every failure a handler can hit ends in a definite status code and a JSON
/// body. Validation problems are the client's (4xx); store problems are an
/// upstream failure (5xx).
#[derive(Debug)]
pub enum ApiError {
    /// Model path parameter is not a usable identifier
    InvalidModel(String),
    /// Timestep path parameter is not a non-negative integer
    InvalidTimestep(String),
    /// Store connectivity or query failure
    StoreError(anyhow::Error),
    /// Store did not answer in time
    StoreTimeout(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidModel(reason) => {
                tracing::warn!("Rejected model parameter: {}", reason);
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid model: {}", reason),
                )
            }
            ApiError::InvalidTimestep(raw) => {
                tracing::warn!("Rejected timestep parameter: {:?}", raw);
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid timestep: expected a non-negative integer, got '{}'", raw),
                )
            }
            ApiError::StoreError(err) => {
                tracing::error!("Store error: {:#}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Store error: {:#}", err),
                )
            }
            ApiError::StoreTimeout(key) => {
                tracing::error!("Store timed out reading {}", key);
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    format!("Store timed out reading {}", key),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreError(err)
    }
}
