//! BlogPost projection and label handling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{PostNumber, Timestamp};

/// Label marking an issue as a published post.
pub const PUBLISHED_LABEL: &str = "published";

/// Label marking an issue as a draft. Never exposed as a tag.
pub const DRAFT_LABEL: &str = "draft";

/// Public path of a post on the site.
pub fn post_path(number: PostNumber) -> String {
    format!("/blog/{}", number)
}

/// A blog post as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    pub number: PostNumber,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub html_url: String,
    pub tags: Vec<String>,
    pub url: String,
}

/// Issue fields the post projection needs, independent of the GitHub wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledIssue {
    pub id: u64,
    pub number: PostNumber,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub html_url: String,
    pub labels: Vec<String>,
}

impl LabeledIssue {
    /// Whether the issue carries the `published` label.
    pub fn is_published(&self) -> bool {
        self.labels.iter().any(|l| l == PUBLISHED_LABEL)
    }

    /// Labels minus the control labels, in their original order.
    pub fn tags(&self) -> Vec<String> {
        self.labels
            .iter()
            .filter(|l| l.as_str() != PUBLISHED_LABEL && l.as_str() != DRAFT_LABEL)
            .cloned()
            .collect()
    }

    /// Projects the issue into a post.
    pub fn into_post(self) -> BlogPost {
        let tags = self.tags();
        BlogPost {
            id: self.id,
            url: post_path(self.number),
            number: self.number,
            title: self.title,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
            html_url: self.html_url,
            tags,
        }
    }
}

/// Which posts a caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostQuery {
    /// Every published post, newest first.
    All,
    /// Published posts carrying the given tag, newest first.
    Tagged(String),
    /// A single post by issue number.
    Single(PostNumber),
}

impl PostQuery {
    /// Builds the query from request parameters. An id wins over a tag;
    /// a blank tag means no filter.
    pub fn from_params(id: Option<PostNumber>, tag: Option<&str>) -> Self {
        match (id, tag.map(str::trim).filter(|t| !t.is_empty())) {
            (Some(number), _) => PostQuery::Single(number),
            (None, Some(tag)) => PostQuery::Tagged(tag.to_string()),
            (None, None) => PostQuery::All,
        }
    }
}

/// Unique tags across `posts`, sorted.
pub fn all_tags(posts: &[BlogPost]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
