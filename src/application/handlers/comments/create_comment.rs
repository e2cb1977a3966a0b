//! CreateCommentHandler - Command handler for new reader comments.

use std::sync::Arc;

use super::CommentsError;
use crate::domain::comment::{CreateCommentInput, CreatedComment};
use crate::domain::foundation::{PostNumber, ValidationError};
use crate::ports::CommentStore;

/// Raw comment submission, validated by the handler.
#[derive(Debug, Clone, Default)]
pub struct CreateCommentCommand {
    pub post_id: Option<PostNumber>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub content: Option<String>,
}

/// Validates a submission and stores it as pending.
///
/// Nothing reaches the store unless validation passes.
pub struct CreateCommentHandler {
    store: Arc<dyn CommentStore>,
}

impl CreateCommentHandler {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateCommentCommand) -> Result<CreatedComment, CommentsError> {
        let post_id = cmd
            .post_id
            .ok_or_else(|| ValidationError::invalid_format("postId", "must be a positive integer"))?;

        let input = CreateCommentInput::new(
            post_id,
            cmd.author_name.as_deref(),
            cmd.author_email.as_deref(),
            cmd.content.as_deref(),
        )?;

        let record = self.store.insert(input.to_new_comment()).await?;
        tracing::info!(post_id = %post_id, comment_id = %record.id, "Comment submitted");

        Ok(CreatedComment::from(record))
    }
}
