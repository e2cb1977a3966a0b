//! Email sender port - transactional email dispatch.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sends a single email to the newsletter subscribers.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<EmailReceipt, EmailError>;
}

/// Email to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub html_body: String,
    /// RFC 3339 publish time; `None` means now. Ignored for drafts.
    pub publish_at: Option<String>,
    /// Store as a draft instead of scheduling.
    pub draft: bool,
}

/// Provider acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailReceipt {
    pub id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub publish_at: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Errors from the email provider.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Email request failed: {0}")]
    Network(String),

    #[error("Buttondown API error: {status} {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode email provider response: {0}")]
    Decode(String),
}
