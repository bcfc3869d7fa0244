use crate::error::{ApiError, ErrorResponse};
use crate::keys;
use crate::models::{ModelName, SeriesResponse, SpecsResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/models handler - List every known model
///
/// Returns the `model_names` list in insertion order.
#[utoipa::path(
    get,
    path = routes::MODELS,
    responses(
        (status = 200, description = "Model names", body = SeriesResponse),
        (status = 502, description = "Store error", body = ErrorResponse),
        (status = 504, description = "Store timeout", body = ErrorResponse)
    ),
    tag = "models"
)]
pub async fn list_models_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SeriesResponse>), ApiError> {
    let names = state.read_list(keys::MODEL_NAMES, 0, -1).await?;
    tracing::info!("Listed {} models", names.len());
    Ok((StatusCode::OK, Json(SeriesResponse(names))))
}

/// GET /api/models/{model}/specs handler - Configuration of one run
///
/// A model without specs yields an empty object.
#[utoipa::path(
    get,
    path = routes::MODEL_SPECS,
    params(
        ("model" = String, Path, description = "Model identifier")
    ),
    responses(
        (status = 200, description = "Specs mapping", body = SpecsResponse),
        (status = 400, description = "Invalid model", body = ErrorResponse),
        (status = 502, description = "Store error", body = ErrorResponse),
        (status = 504, description = "Store timeout", body = ErrorResponse)
    ),
    tag = "models"
)]
pub async fn specs_handler(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> Result<(StatusCode, Json<SpecsResponse>), ApiError> {
    let model = ModelName::parse(&model)?;
    let key = keys::specs_key(&model);

    let specs = state.read_hash(&key).await?;
    tracing::info!("Read {} spec fields for model {}", specs.len(), model);
    Ok((StatusCode::OK, Json(SpecsResponse(specs))))
}
