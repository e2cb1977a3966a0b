//! Validation of new comments.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::CommentStatus;
use crate::domain::foundation::{PostNumber, ValidationError};

/// Minimum author name length, in characters, after trimming.
pub const MIN_AUTHOR_NAME_CHARS: usize = 2;

/// Minimum comment length, in characters, after trimming.
pub const MIN_CONTENT_CHARS: usize = 5;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// A validated request to add a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentInput {
    post_id: PostNumber,
    author_name: String,
    author_email: Option<String>,
    content: String,
}

impl CreateCommentInput {
    /// Validates raw user input.
    ///
    /// Name and content are trimmed before their length checks. An empty
    /// email counts as no email.
    pub fn new(
        post_id: PostNumber,
        author_name: Option<&str>,
        author_email: Option<&str>,
        content: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let author_name = author_name.map(str::trim).unwrap_or_default();
        if author_name.chars().count() < MIN_AUTHOR_NAME_CHARS {
            return Err(ValidationError::too_short("authorName", MIN_AUTHOR_NAME_CHARS));
        }

        let content = content.map(str::trim).unwrap_or_default();
        if content.chars().count() < MIN_CONTENT_CHARS {
            return Err(ValidationError::too_short("content", MIN_CONTENT_CHARS));
        }

        let author_email = author_email.map(str::trim).filter(|e| !e.is_empty());
        if let Some(email) = author_email {
            if !EMAIL.is_match(email) {
                return Err(ValidationError::invalid_format(
                    "authorEmail",
                    "not a valid email address",
                ));
            }
        }

        Ok(Self {
            post_id,
            author_name: author_name.to_string(),
            author_email: author_email.map(str::to_string),
            content: content.to_string(),
        })
    }

    pub fn post_id(&self) -> PostNumber {
        self.post_id
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_email(&self) -> Option<&str> {
        self.author_email.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Row to insert: whitespace runs in name and email collapse to one
    /// space, status is always `pending`.
    pub fn to_new_comment(&self) -> NewComment {
        NewComment {
            post_id: self.post_id,
            author_name: collapse_whitespace(&self.author_name),
            author_email: self.author_email.as_deref().map(collapse_whitespace),
            content: self.content.clone(),
            status: CommentStatus::Pending,
        }
    }
}

/// Insert payload for the comments table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub post_id: PostNumber,
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    pub status: CommentStatus,
}

fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}
