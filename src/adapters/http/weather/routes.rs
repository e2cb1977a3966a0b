//! Axum router configuration for the weather endpoint.

use axum::routing::get;
use axum::Router;

use super::handlers::get_weather;
use crate::adapters::http::state::AppState;

pub fn weather_routes() -> Router<AppState> {
    Router::new().route("/weather", get(get_weather))
}
