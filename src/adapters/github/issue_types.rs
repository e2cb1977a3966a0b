//! GitHub REST issue payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::foundation::{PostNumber, Timestamp};
use crate::domain::post::LabeledIssue;
use crate::ports::PostSourceError;

/// Issue as returned by `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Deserialize)]
pub(super) struct GithubIssue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<GithubLabel>,
    /// Present when the "issue" is actually a pull request.
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

/// Labels come back as objects, but the API also documents bare strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum GithubLabel {
    Object { name: String },
    Name(String),
}

impl GithubLabel {
    fn into_name(self) -> String {
        match self {
            GithubLabel::Object { name } | GithubLabel::Name(name) => name,
        }
    }
}

impl GithubIssue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

impl TryFrom<GithubIssue> for LabeledIssue {
    type Error = PostSourceError;

    fn try_from(issue: GithubIssue) -> Result<Self, Self::Error> {
        let number = PostNumber::new(issue.number)
            .map_err(|e| PostSourceError::Decode(format!("issue {}: {}", issue.id, e)))?;

        Ok(LabeledIssue {
            id: issue.id,
            number,
            title: issue.title,
            body: issue.body.unwrap_or_default(),
            created_at: Timestamp::from_datetime(issue.created_at),
            updated_at: Timestamp::from_datetime(issue.updated_at),
            html_url: issue.html_url,
            labels: issue.labels.into_iter().map(GithubLabel::into_name).collect(),
        })
    }
}
