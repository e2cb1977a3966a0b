//! Request and response shapes for the posts endpoints.

use serde::{Deserialize, Serialize};

use crate::application::GetPostsResult;
use crate::domain::foundation::{PostNumber, ValidationError};
use crate::domain::post::BlogPost;

/// Query string of `GET /api/posts`.
#[derive(Debug, Default, Deserialize)]
pub struct PostsParams {
    pub id: Option<String>,
    pub tag: Option<String>,
}

impl PostsParams {
    /// Parses `id`; `Ok(None)` when absent or blank.
    pub fn post_number(&self) -> Result<Option<PostNumber>, ValidationError> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<PostNumber>)
            .transpose()
    }
}

/// A list of posts or a single post, serialized without a wrapper.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PostsResponse {
    List(Vec<BlogPost>),
    Single(BlogPost),
}

impl From<GetPostsResult> for PostsResponse {
    fn from(result: GetPostsResult) -> Self {
        match result {
            GetPostsResult::List(posts) => PostsResponse::List(posts),
            GetPostsResult::Single(post) => PostsResponse::Single(post),
        }
    }
}
