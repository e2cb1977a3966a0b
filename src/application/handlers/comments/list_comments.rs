//! ListCommentsHandler - Query handler for a post's visible comments.

use std::sync::Arc;

use super::CommentsError;
use crate::domain::comment::CommentRecord;
use crate::domain::foundation::PostNumber;
use crate::ports::CommentStore;

pub struct ListCommentsHandler {
    store: Arc<dyn CommentStore>,
}

impl ListCommentsHandler {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        Self { store }
    }

    /// Approved comments, oldest first.
    pub async fn handle(&self, post_id: PostNumber) -> Result<Vec<CommentRecord>, CommentsError> {
        let comments = self.store.list_approved(post_id).await?;
        Ok(comments.into_iter().filter(CommentRecord::is_approved).collect())
    }
}
