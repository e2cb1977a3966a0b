//! NotifySubscribersHandler - Command handler announcing a post by email.
//!
//! Runs in sequence: fetch the post, render its markdown, compose the
//! announcement, hand it to the email provider. Nothing is retried.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::PostNumber;
use crate::domain::newsletter::NewsletterEmail;
use crate::ports::{
    EmailError, EmailSender, MarkdownRenderer, OutgoingEmail, PostSource, PostSourceError,
    RenderError,
};

/// Announce the post with the given issue number.
#[derive(Debug, Clone)]
pub struct NotifySubscribersCommand {
    pub issue_number: PostNumber,
    /// Create the email as a draft instead of scheduling it.
    pub draft: bool,
}

/// Outcome reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifySubscribersResult {
    pub email_id: String,
    pub publish_at: Option<String>,
    pub draft: bool,
}

/// Errors from the notify flow.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("BUTTONDOWN_TOKEN is not configured")]
    NotConfigured,

    #[error("Post #{0} not found")]
    PostNotFound(PostNumber),

    #[error(transparent)]
    Source(#[from] PostSourceError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Email(#[from] EmailError),
}

pub struct NotifySubscribersHandler {
    posts: Arc<dyn PostSource>,
    renderer: Arc<dyn MarkdownRenderer>,
    sender: Option<Arc<dyn EmailSender>>,
    site_url: String,
    site_name: String,
}

impl NotifySubscribersHandler {
    /// `sender` is `None` when no email provider token is configured.
    pub fn new(
        posts: Arc<dyn PostSource>,
        renderer: Arc<dyn MarkdownRenderer>,
        sender: Option<Arc<dyn EmailSender>>,
        site_url: impl Into<String>,
        site_name: impl Into<String>,
    ) -> Self {
        Self {
            posts,
            renderer,
            sender,
            site_url: site_url.into(),
            site_name: site_name.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: NotifySubscribersCommand,
    ) -> Result<NotifySubscribersResult, NotifyError> {
        let sender = self.sender.as_ref().ok_or(NotifyError::NotConfigured)?;

        let post = self
            .posts
            .get_published(cmd.issue_number)
            .await?
            .ok_or(NotifyError::PostNotFound(cmd.issue_number))?;

        let rendered = self.renderer.render(&post.body)?;
        let email = NewsletterEmail::for_post(&post, &rendered, &self.site_url, &self.site_name);

        let receipt = sender
            .send(OutgoingEmail {
                subject: email.subject,
                html_body: email.html_body,
                publish_at: None,
                draft: cmd.draft,
            })
            .await?;

        tracing::info!(
            issue_number = %cmd.issue_number,
            email_id = %receipt.id,
            draft = cmd.draft,
            "Subscribers notified"
        );

        Ok(NotifySubscribersResult {
            email_id: receipt.id,
            publish_at: receipt.publish_at,
            draft: cmd.draft,
        })
    }
}
