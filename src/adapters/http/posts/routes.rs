//! Axum router configuration for posts endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_posts, list_tags};
use crate::adapters::http::state::AppState;

/// # Routes
/// - `GET /posts` - published posts (`?tag=`, `?id=`)
/// - `GET /tags` - tag list
pub fn posts_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(get_posts))
        .route("/tags", get(list_tags))
}
