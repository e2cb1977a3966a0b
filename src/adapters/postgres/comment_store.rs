//! PostgreSQL implementation of the `CommentStore` port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::comment::{CommentRecord, CommentStatus, NewComment};
use crate::domain::foundation::{PostNumber, Timestamp};
use crate::ports::{CommentStore, CommentStoreError};

/// Comment store backed by a sqlx connection pool.
pub struct PostgresCommentStore {
    pool: PgPool,
}

impl PostgresCommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a comment.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    post_id: i64,
    author_name: String,
    author_email: Option<String>,
    content: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for CommentRecord {
    type Error = CommentStoreError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let post_id = u64::try_from(row.post_id)
            .ok()
            .and_then(|n| PostNumber::new(n).ok())
            .ok_or_else(|| CommentStoreError::Decode(format!("invalid post_id: {}", row.post_id)))?;
        let status = CommentStatus::parse(&row.status)
            .ok_or_else(|| CommentStoreError::Decode(format!("invalid status: {}", row.status)))?;

        Ok(CommentRecord {
            id: row.id.to_string(),
            post_id,
            author_name: row.author_name,
            author_email: row.author_email,
            content: row.content,
            status,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn post_id_param(post_id: PostNumber) -> Result<i64, CommentStoreError> {
    i64::try_from(post_id.get())
        .map_err(|_| CommentStoreError::Decode(format!("post_id out of range: {}", post_id)))
}

#[async_trait]
impl CommentStore for PostgresCommentStore {
    async fn list_approved(&self, post_id: PostNumber) -> Result<Vec<CommentRecord>, CommentStoreError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT id, post_id, author_name, author_email, content, status, created_at
            FROM comments
            WHERE post_id = $1 AND status = 'approved'
            ORDER BY created_at ASC
            "#,
        )
        .bind(post_id_param(post_id)?)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CommentRecord::try_from).collect()
    }

    async fn insert(&self, comment: NewComment) -> Result<CommentRecord, CommentStoreError> {
        let row: CommentRow = sqlx::query_as(
            r#"
            INSERT INTO comments (post_id, author_name, author_email, content, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, post_id, author_name, author_email, content, status, created_at
            "#,
        )
        .bind(post_id_param(comment.post_id)?)
        .bind(&comment.author_name)
        .bind(&comment.author_email)
        .bind(&comment.content)
        .bind(comment.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        let record = CommentRecord::try_from(row)?;
        tracing::info!(comment_id = %record.id, post_id = %record.post_id, "Comment stored");
        Ok(record)
    }
}
