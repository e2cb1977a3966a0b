//! Supabase implementation of the `CommentStore` port.

use async_trait::async_trait;

use super::client::SupabaseClients;
use crate::domain::comment::{CommentRecord, NewComment};
use crate::domain::foundation::PostNumber;
use crate::ports::{CommentStore, CommentStoreError};

const TABLE_NAME: &str = "comments";
const SELECT_FIELDS: &str = "id,post_id,author_name,author_email,content,status,created_at";

/// Comment store over the Supabase REST API.
///
/// Reads go through the public client, writes through the admin client.
pub struct SupabaseCommentStore {
    clients: SupabaseClients,
}

impl SupabaseCommentStore {
    pub fn new(clients: SupabaseClients) -> Self {
        Self { clients }
    }

    async fn fail(response: reqwest::Response, action: &str) -> CommentStoreError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        tracing::error!(status, error = %message, action, "Supabase request failed");
        CommentStoreError::Upstream { status, message }
    }
}

#[async_trait]
impl CommentStore for SupabaseCommentStore {
    async fn list_approved(&self, post_id: PostNumber) -> Result<Vec<CommentRecord>, CommentStoreError> {
        let client = self.clients.public()?;
        let post_filter = format!("eq.{}", post_id);

        let response = client
            .get(TABLE_NAME)
            .query(&[
                ("select", SELECT_FIELDS),
                ("post_id", post_filter.as_str()),
                ("status", "eq.approved"),
                ("order", "created_at.asc"),
            ])
            .send()
            .await
            .map_err(|e| CommentStoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "fetch comments").await);
        }

        let rows: Vec<CommentRecord> = response
            .json()
            .await
            .map_err(|e| CommentStoreError::Decode(e.to_string()))?;

        Ok(rows.into_iter().filter(CommentRecord::is_approved).collect())
    }

    async fn insert(&self, comment: NewComment) -> Result<CommentRecord, CommentStoreError> {
        let client = self.clients.admin()?;

        let response = client
            .post(TABLE_NAME)
            .query(&[("select", SELECT_FIELDS)])
            .header("Prefer", "return=representation")
            .header(reqwest::header::ACCEPT, "application/vnd.pgrst.object+json")
            .json(&comment)
            .send()
            .await
            .map_err(|e| CommentStoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "insert comment").await);
        }

        let record: CommentRecord = response
            .json()
            .await
            .map_err(|e| CommentStoreError::Decode(e.to_string()))?;

        tracing::info!(comment_id = %record.id, post_id = %record.post_id, "Comment stored");
        Ok(record)
    }
}
