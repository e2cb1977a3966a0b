//! Axum router configuration for the notify hook.

use axum::routing::post;
use axum::Router;

use super::handlers::notify_subscribers;
use crate::adapters::http::state::AppState;

/// # Routes
/// - `POST /notify` - announce a post by email (bearer secret when configured)
pub fn notify_routes() -> Router<AppState> {
    Router::new().route("/notify", post(notify_subscribers))
}
