use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Sends PING to the store to verify connectivity.
/// Returns 200 OK if the store answers in time, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    let ping = tokio::time::timeout(state.config.store_timeout, state.store.ping()).await;

    let failure = match ping {
        Ok(Ok(())) => {
            tracing::debug!("Health check passed");
            return Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                }),
            ));
        }
        Ok(Err(e)) => format!("{:#}", e),
        Err(_) => format!(
            "no reply within {}ms",
            state.config.store_timeout.as_millis()
        ),
    };

    tracing::error!("Health check failed: {}", failure);
    Err((
        StatusCode::SERVICE_UNAVAILABLE,
        Json(UnhealthyResponse {
            status: "unhealthy".to_string(),
            error: format!("Cannot reach store: {}", failure),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{get, setup_test_app};
    use crate::store::memory::{MemoryStore, StalledStore, UnreachableStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let app = setup_test_app(Arc::new(MemoryStore::new()));

        let (status, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        let app = setup_test_app(Arc::new(UnreachableStore));

        let (status, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let response_json: UnhealthyResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "unhealthy");
        assert!(response_json.error.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_health_endpoint_stalled_store() {
        let app = setup_test_app(Arc::new(StalledStore));

        let (status, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let response_json: UnhealthyResponse = serde_json::from_slice(&body).unwrap();
        assert!(response_json.error.contains("no reply"));
    }
}
