//! Comment handlers.
//!
//! ## Commands
//! - Create a comment (always stored as pending)
//!
//! ## Queries
//! - List approved comments for a post

mod create_comment;
mod list_comments;

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::CommentStoreError;

pub use create_comment::{CreateCommentCommand, CreateCommentHandler};
pub use list_comments::ListCommentsHandler;

/// Errors from comment handlers.
#[derive(Debug, Error)]
pub enum CommentsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] CommentStoreError),
}
