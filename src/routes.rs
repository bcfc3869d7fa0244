// Route path constants - single source of truth for all API paths

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const MODELS: &str = "/api/models";
pub const MODEL_SPECS: &str = "/api/models/{model}/specs";
pub const MODEL_LOSS: &str = "/api/models/{model}/loss";
pub const MODEL_SELECTIVE_TIMES: &str = "/api/models/{model}/selective_times";
pub const MODEL_REWARD: &str = "/api/models/{model}/reward";
pub const MODEL_REWARD_AT: &str = "/api/models/{model}/reward/{timestep}";
pub const MODEL_ACTION_AT: &str = "/api/models/{model}/action/{timestep}";
pub const MODEL_SCREEN_AT: &str = "/api/models/{model}/screen/{timestep}";
pub const MODEL_Q_ESTIMATE_AT: &str = "/api/models/{model}/q_estimate/{timestep}";
pub const MODEL_Q_FUTURE_AT: &str = "/api/models/{model}/q_future/{timestep}";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(MODELS, get(handlers::list_models_handler))
        .route(MODEL_SPECS, get(handlers::specs_handler))
        .route(MODEL_LOSS, get(handlers::loss_handler))
        .route(MODEL_SELECTIVE_TIMES, get(handlers::selective_times_handler))
        .route(MODEL_REWARD, get(handlers::reward_handler))
        .route(MODEL_REWARD_AT, get(handlers::reward_at_handler))
        .route(MODEL_ACTION_AT, get(handlers::action_at_handler))
        .route(MODEL_SCREEN_AT, get(handlers::screen_handler))
        .route(MODEL_Q_ESTIMATE_AT, get(handlers::q_estimate_handler))
        .route(MODEL_Q_FUTURE_AT, get(handlers::q_future_handler))
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
