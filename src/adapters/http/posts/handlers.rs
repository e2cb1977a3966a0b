//! HTTP handlers for posts endpoints.

use axum::extract::{Query, State};
use axum::Json;

use super::dto::{PostsParams, PostsResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::post::PostQuery;

/// GET /api/posts - all published posts, by tag, or one by `id`
pub async fn get_posts(
    State(state): State<AppState>,
    Query(params): Query<PostsParams>,
) -> Result<Json<PostsResponse>, ApiError> {
    let id = params
        .post_number()
        .map_err(|_| ApiError::bad_request("id must be a positive integer"))?;

    let query = PostQuery::from_params(id, params.tag.as_deref());
    let result = state.get_posts_handler().handle(query).await?;

    Ok(Json(result.into()))
}

/// GET /api/tags - unique tags of published posts
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let tags = state.list_tags_handler().handle().await?;
    Ok(Json(tags))
}
