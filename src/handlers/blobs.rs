use crate::error::{ApiError, ErrorResponse};
use crate::keys::{self, Blob};
use crate::models::{ModelName, Timestep};
use crate::routes;
use axum::{extract::Path, http::StatusCode};

/// Body served by the per-timestep blob routes until blob storage exists
pub const PLACEHOLDER: &str = "I am not sure this functionality is working...";

type BlobResult = Result<(StatusCode, &'static str), ApiError>;

// Validates and logs the would-be key; never reads the store.
fn placeholder(model: &str, timestep: &str, blob: Blob) -> BlobResult {
    let model = ModelName::parse(model)?;
    let timestep = Timestep::parse(timestep)?;
    let key = keys::blob_key(&model, blob, timestep);

    tracing::debug!("Blob read for {} is not implemented", key);
    Ok((StatusCode::OK, PLACEHOLDER))
}

/// GET /api/models/{model}/screen/{timestep} handler - Not implemented
#[utoipa::path(
    get,
    path = routes::MODEL_SCREEN_AT,
    params(
        ("model" = String, Path, description = "Model identifier"),
        ("timestep" = u32, Path, description = "Zero-based step index")
    ),
    responses(
        (status = 200, description = "Fixed placeholder text", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid model or timestep", body = ErrorResponse)
    ),
    tag = "blobs"
)]
pub async fn screen_handler(Path((model, timestep)): Path<(String, String)>) -> BlobResult {
    placeholder(&model, &timestep, Blob::Screen)
}

/// GET /api/models/{model}/q_estimate/{timestep} handler - Not implemented
#[utoipa::path(
    get,
    path = routes::MODEL_Q_ESTIMATE_AT,
    params(
        ("model" = String, Path, description = "Model identifier"),
        ("timestep" = u32, Path, description = "Zero-based step index")
    ),
    responses(
        (status = 200, description = "Fixed placeholder text", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid model or timestep", body = ErrorResponse)
    ),
    tag = "blobs"
)]
pub async fn q_estimate_handler(Path((model, timestep)): Path<(String, String)>) -> BlobResult {
    placeholder(&model, &timestep, Blob::QEstimate)
}

/// GET /api/models/{model}/q_future/{timestep} handler - Not implemented
#[utoipa::path(
    get,
    path = routes::MODEL_Q_FUTURE_AT,
    params(
        ("model" = String, Path, description = "Model identifier"),
        ("timestep" = u32, Path, description = "Zero-based step index")
    ),
    responses(
        (status = 200, description = "Fixed placeholder text", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid model or timestep", body = ErrorResponse)
    ),
    tag = "blobs"
)]
pub async fn q_future_handler(Path((model, timestep)): Path<(String, String)>) -> BlobResult {
    placeholder(&model, &timestep, Blob::QFuture)
}

#[cfg(test)]
mod tests {
    use super::PLACEHOLDER;
    use crate::handlers::testing::{get, setup_test_app};
    use crate::store::memory::{MemoryStore, UnreachableStore};
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_placeholder_routes_never_touch_store() {
        let store = Arc::new(
            MemoryStore::new()
                .with_list("cnn:screen:3", &["pixels"])
                .with_list("cnn:q_estimate:3", &["0.4"]),
        );
        let app = setup_test_app(store.clone());

        for field in ["screen", "q_estimate", "q_future"] {
            for (model, t) in [("cnn", "3"), ("other", "0"), ("cnn", "4000000000")] {
                let uri = format!("/api/models/{}/{}/{}", model, field, t);
                let (status, body) = get(app.clone(), &uri).await;
                assert_eq!(status, StatusCode::OK, "{}", uri);
                assert_eq!(String::from_utf8(body).unwrap(), PLACEHOLDER);
            }
        }
        assert_eq!(store.reads(), 0);
    }

    #[tokio::test]
    async fn test_placeholder_ignores_store_outage() {
        let app = setup_test_app(Arc::new(UnreachableStore));

        let (status, body) = get(app, "/api/models/cnn/q_future/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(body).unwrap(), PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_placeholder_validates_timestep() {
        let app = setup_test_app(Arc::new(MemoryStore::new()));

        let (status, _) = get(app, "/api/models/cnn/screen/-5").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
