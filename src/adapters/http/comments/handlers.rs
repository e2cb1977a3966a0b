//! HTTP handlers for comments endpoints.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;

use super::dto::{CommentsParams, CreateCommentRequest};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::comment::{CommentRecord, CreatedComment};

/// GET /api/comments?postId=<n> - approved comments, oldest first
pub async fn list_comments(
    State(state): State<AppState>,
    Query(params): Query<CommentsParams>,
) -> Result<Json<Vec<CommentRecord>>, ApiError> {
    let post_id = params
        .post_number()
        .ok_or_else(|| ApiError::bad_request("postId is required"))?;

    let comments = state.list_comments_handler().handle(post_id).await?;
    Ok(Json(comments))
}

/// POST /api/comments - submit a comment for moderation
///
/// The body is parsed as JSON whatever the `Content-Type`; browsers posting
/// a plain string body send `text/plain`.
pub async fn create_comment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatedComment>, ApiError> {
    let request: CreateCommentRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected comment payload");
        ApiError::bad_request("Invalid JSON payload")
    })?;

    let created = state.create_comment_handler().handle(request.into()).await?;
    Ok(Json(created))
}
