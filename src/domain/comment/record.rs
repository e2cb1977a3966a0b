//! Stored comment rows.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::domain::foundation::{PostNumber, Timestamp};

/// Moderation state of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
    Spam,
}

impl CommentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Pending => "pending",
            CommentStatus::Approved => "approved",
            CommentStatus::Spam => "spam",
        }
    }

    /// Parses the stored lowercase representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(CommentStatus::Pending),
            "approved" => Some(CommentStatus::Approved),
            "spam" => Some(CommentStatus::Spam),
            _ => None,
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comment row as stored in the comments table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Row id. Tables keyed by uuid or bigint are both accepted.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub post_id: PostNumber,
    pub author_name: String,
    #[serde(default)]
    pub author_email: Option<String>,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: Timestamp,
}

impl CommentRecord {
    pub fn is_approved(&self) -> bool {
        self.status == CommentStatus::Approved
    }
}

/// Result of inserting a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedComment {
    pub comment: CommentRecord,
    pub requires_approval: bool,
}

impl From<CommentRecord> for CreatedComment {
    fn from(comment: CommentRecord) -> Self {
        let requires_approval = !comment.is_approved();
        Self {
            comment,
            requires_approval,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
