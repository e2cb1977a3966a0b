//! GetPostsHandler - Query handler for published posts.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::PostNumber;
use crate::domain::post::{BlogPost, PostQuery};
use crate::ports::{PostSource, PostSourceError};

/// Result of a posts query; its shape follows the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetPostsResult {
    List(Vec<BlogPost>),
    Single(BlogPost),
}

/// Errors from post queries.
#[derive(Debug, Error)]
pub enum PostsError {
    #[error("Post #{0} not found")]
    NotFound(PostNumber),

    #[error(transparent)]
    Source(#[from] PostSourceError),
}

pub struct GetPostsHandler {
    source: Arc<dyn PostSource>,
}

impl GetPostsHandler {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: PostQuery) -> Result<GetPostsResult, PostsError> {
        match query {
            PostQuery::All => Ok(GetPostsResult::List(self.source.list_published(None).await?)),
            PostQuery::Tagged(tag) => Ok(GetPostsResult::List(
                self.source.list_published(Some(&tag)).await?,
            )),
            PostQuery::Single(number) => self
                .source
                .get_published(number)
                .await?
                .map(GetPostsResult::Single)
                .ok_or(PostsError::NotFound(number)),
        }
    }
}
