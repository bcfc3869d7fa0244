use crate::error::{ApiError, ErrorResponse};
use crate::keys::{self, Series};
use crate::models::{ModelName, SeriesResponse, Timestep};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

type SeriesResult = Result<(StatusCode, Json<SeriesResponse>), ApiError>;

async fn full_series(state: &AppState, model: &str, series: Series) -> SeriesResult {
    let model = ModelName::parse(model)?;
    let key = keys::series_key(&model, series);

    let values = state.read_list(&key, 0, -1).await?;
    tracing::info!("Read {} {} values for model {}", values.len(), series.field(), model);
    Ok((StatusCode::OK, Json(SeriesResponse(values))))
}

/// Zero or one element: past the end of the series is an empty array, not an error.
async fn series_at(state: &AppState, model: &str, timestep: &str, series: Series) -> SeriesResult {
    let model = ModelName::parse(model)?;
    let timestep = Timestep::parse(timestep)?;
    let key = keys::series_key(&model, series);

    let values = state.read_list(&key, timestep.index(), timestep.index()).await?;
    tracing::info!(
        "Read {} at timestep {} for model {} ({} values)",
        series.field(),
        timestep,
        model,
        values.len()
    );
    Ok((StatusCode::OK, Json(SeriesResponse(values))))
}

/// GET /api/models/{model}/loss handler - Loss value per step
#[utoipa::path(
    get,
    path = routes::MODEL_LOSS,
    params(
        ("model" = String, Path, description = "Model identifier")
    ),
    responses(
        (status = 200, description = "Loss series", body = SeriesResponse),
        (status = 400, description = "Invalid model", body = ErrorResponse),
        (status = 502, description = "Store error", body = ErrorResponse),
        (status = 504, description = "Store timeout", body = ErrorResponse)
    ),
    tag = "series"
)]
pub async fn loss_handler(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> SeriesResult {
    full_series(&state, &model, Series::Loss).await
}

/// GET /api/models/{model}/selective_times handler
#[utoipa::path(
    get,
    path = routes::MODEL_SELECTIVE_TIMES,
    params(
        ("model" = String, Path, description = "Model identifier")
    ),
    responses(
        (status = 200, description = "Selective times series", body = SeriesResponse),
        (status = 400, description = "Invalid model", body = ErrorResponse),
        (status = 502, description = "Store error", body = ErrorResponse),
        (status = 504, description = "Store timeout", body = ErrorResponse)
    ),
    tag = "series"
)]
pub async fn selective_times_handler(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> SeriesResult {
    full_series(&state, &model, Series::SelectiveTimes).await
}

/// GET /api/models/{model}/reward handler - Reward per step
#[utoipa::path(
    get,
    path = routes::MODEL_REWARD,
    params(
        ("model" = String, Path, description = "Model identifier")
    ),
    responses(
        (status = 200, description = "Reward series", body = SeriesResponse),
        (status = 400, description = "Invalid model", body = ErrorResponse),
        (status = 502, description = "Store error", body = ErrorResponse),
        (status = 504, description = "Store timeout", body = ErrorResponse)
    ),
    tag = "series"
)]
pub async fn reward_handler(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> SeriesResult {
    full_series(&state, &model, Series::Reward).await
}

/// GET /api/models/{model}/reward/{timestep} handler - Reward at one step
#[utoipa::path(
    get,
    path = routes::MODEL_REWARD_AT,
    params(
        ("model" = String, Path, description = "Model identifier"),
        ("timestep" = u32, Path, description = "Zero-based step index")
    ),
    responses(
        (status = 200, description = "Reward at the step, empty if out of range", body = SeriesResponse),
        (status = 400, description = "Invalid model or timestep", body = ErrorResponse),
        (status = 502, description = "Store error", body = ErrorResponse),
        (status = 504, description = "Store timeout", body = ErrorResponse)
    ),
    tag = "series"
)]
pub async fn reward_at_handler(
    State(state): State<AppState>,
    Path((model, timestep)): Path<(String, String)>,
) -> SeriesResult {
    series_at(&state, &model, &timestep, Series::Reward).await
}

/// GET /api/models/{model}/action/{timestep} handler - Action taken at one step
#[utoipa::path(
    get,
    path = routes::MODEL_ACTION_AT,
    params(
        ("model" = String, Path, description = "Model identifier"),
        ("timestep" = u32, Path, description = "Zero-based step index")
    ),
    responses(
        (status = 200, description = "Action at the step, empty if out of range", body = SeriesResponse),
        (status = 400, description = "Invalid model or timestep", body = ErrorResponse),
        (status = 502, description = "Store error", body = ErrorResponse),
        (status = 504, description = "Store timeout", body = ErrorResponse)
    ),
    tag = "series"
)]
pub async fn action_at_handler(
    State(state): State<AppState>,
    Path((model, timestep)): Path<(String, String)>,
) -> SeriesResult {
    series_at(&state, &model, &timestep, Series::Action).await
}
