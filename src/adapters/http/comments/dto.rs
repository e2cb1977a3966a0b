//! Request shapes for the comments endpoints.
//!
//! Responses reuse the domain types: an array of `CommentRecord` for reads,
//! `CreatedComment` (`{comment, requiresApproval}`) for writes.

use serde::Deserialize;
use serde_json::Value;

use crate::application::CreateCommentCommand;
use crate::domain::foundation::PostNumber;

/// Query string of `GET /api/comments`.
#[derive(Debug, Default, Deserialize)]
pub struct CommentsParams {
    #[serde(rename = "postId")]
    pub post_id: Option<String>,
}

impl CommentsParams {
    pub fn post_number(&self) -> Option<PostNumber> {
        self.post_id.as_deref()?.parse().ok()
    }
}

/// Body of `POST /api/comments`.
///
/// `postId` may be a JSON number or a numeric string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub post_id: Option<Value>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<CreateCommentRequest> for CreateCommentCommand {
    fn from(req: CreateCommentRequest) -> Self {
        CreateCommentCommand {
            post_id: req.post_id.as_ref().and_then(PostNumber::from_json),
            author_name: req.author_name,
            author_email: req.author_email,
            content: req.content,
        }
    }
}
