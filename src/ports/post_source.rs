//! Post source port - where blog posts come from.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::PostNumber;
use crate::domain::post::BlogPost;

/// Read-only access to published posts.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Published posts, newest first. `tag` narrows to posts carrying it.
    async fn list_published(&self, tag: Option<&str>) -> Result<Vec<BlogPost>, PostSourceError>;

    /// A single published post, or `None` when it does not exist or is unpublished.
    async fn get_published(&self, number: PostNumber) -> Result<Option<BlogPost>, PostSourceError>;
}

/// Errors from the post source.
#[derive(Debug, Error)]
pub enum PostSourceError {
    #[error("Post source request failed: {0}")]
    Network(String),

    #[error("Post source returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to decode post source response: {0}")]
    Decode(String),
}
