//! Comment store port - persistence for reader comments.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::comment::{CommentRecord, NewComment};
use crate::domain::foundation::PostNumber;

/// Insert/select access to the comments table.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Approved comments for a post, oldest first.
    async fn list_approved(&self, post_id: PostNumber) -> Result<Vec<CommentRecord>, CommentStoreError>;

    /// Inserts a comment and returns the stored row.
    async fn insert(&self, comment: NewComment) -> Result<CommentRecord, CommentStoreError>;
}

/// Errors from the comment store.
#[derive(Debug, Error)]
pub enum CommentStoreError {
    #[error("Comment store is not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Comment store request failed: {0}")]
    Network(String),

    #[error("Comment store returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Comment store query failed: {0}")]
    Database(String),

    #[error("Failed to decode comment store response: {0}")]
    Decode(String),
}

impl From<sqlx::Error> for CommentStoreError {
    fn from(err: sqlx::Error) -> Self {
        CommentStoreError::Database(err.to_string())
    }
}
