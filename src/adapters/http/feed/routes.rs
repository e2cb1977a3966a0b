//! Axum router configuration for the feed.

use axum::routing::get;
use axum::Router;

use super::handlers::get_feed;
use crate::adapters::http::state::AppState;

/// # Routes
/// - `GET /feed.xml` - RSS feed (mounted at the site root)
pub fn feed_routes() -> Router<AppState> {
    Router::new().route("/feed.xml", get(get_feed))
}
