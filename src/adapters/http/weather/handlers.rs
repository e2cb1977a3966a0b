use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// GET /api/weather - upstream forecast JSON, unchanged
pub async fn get_weather(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let forecast = state.weather.forecast().await?;
    Ok(Json(forecast))
}
