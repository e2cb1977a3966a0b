//! Axum router configuration for comments endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_comment, list_comments};
use crate::adapters::http::state::AppState;

/// # Routes
/// - `GET /comments?postId=` - approved comments for a post
/// - `POST /comments` - submit a comment
pub fn comments_routes() -> Router<AppState> {
    Router::new().route("/comments", get(list_comments).post(create_comment))
}
