//! ListTagsHandler - Query handler for the tag cloud.

use std::sync::Arc;

use crate::domain::post::all_tags;
use crate::ports::{PostSource, PostSourceError};

/// Collects the unique, sorted tags of all published posts.
pub struct ListTagsHandler {
    source: Arc<dyn PostSource>,
}

impl ListTagsHandler {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> Result<Vec<String>, PostSourceError> {
        let posts = self.source.list_published(None).await?;
        Ok(all_tags(&posts))
    }
}
