use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{SeriesResponse, SpecsResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "training-telemetry-api",
        version = "0.1.0",
        description = "Read-only HTTP API over training telemetry stored in Redis"
    ),
    paths(
        handlers::health::health_handler,
        handlers::models::list_models_handler,
        handlers::models::specs_handler,
        handlers::series::loss_handler,
        handlers::series::selective_times_handler,
        handlers::series::reward_handler,
        handlers::series::reward_at_handler,
        handlers::series::action_at_handler,
        handlers::blobs::screen_handler,
        handlers::blobs::q_estimate_handler,
        handlers::blobs::q_future_handler
    ),
    components(
        schemas(
            SeriesResponse,
            SpecsResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "models", description = "Model listing and specs"),
        (name = "series", description = "Per-step telemetry series"),
        (name = "blobs", description = "Per-step blobs (not implemented)")
    )
)]
pub struct ApiDoc;
