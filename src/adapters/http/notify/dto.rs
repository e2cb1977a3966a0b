//! Request and response shapes for `POST /api/notify`.

use serde::Serialize;
use serde_json::Value;

use crate::application::{NotifySubscribersCommand, NotifySubscribersResult};
use crate::domain::foundation::PostNumber;

/// Parsed notify payload.
#[derive(Debug, Clone)]
pub struct NotifyRequest {
    pub issue_number: Option<PostNumber>,
    pub draft: bool,
}

impl NotifyRequest {
    /// `issueNumber` must be a positive JSON number; strings do not count.
    pub fn from_json(value: &Value) -> Self {
        Self {
            issue_number: value
                .get("issueNumber")
                .filter(|v| v.is_number())
                .and_then(PostNumber::from_json),
            draft: value.get("draft").and_then(Value::as_bool).unwrap_or(false),
        }
    }

    pub fn into_command(self) -> Option<NotifySubscribersCommand> {
        Some(NotifySubscribersCommand {
            issue_number: self.issue_number?,
            draft: self.draft,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyResponse {
    pub status: &'static str,
    pub buttondown_email_id: String,
    pub publish_at: Option<String>,
    pub draft: bool,
}

impl From<NotifySubscribersResult> for NotifyResponse {
    fn from(result: NotifySubscribersResult) -> Self {
        Self {
            status: "queued",
            buttondown_email_id: result.email_id,
            publish_at: result.publish_at,
            draft: result.draft,
        }
    }
}
