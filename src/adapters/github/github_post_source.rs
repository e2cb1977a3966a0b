//! GitHub Issues implementation of the `PostSource` port.
//!
//! Published posts are open issues labeled `published`; tags are the
//! remaining labels. Requests are made with the optional token so private
//! repositories and higher rate limits work.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::issue_types::GithubIssue;
use crate::config::GithubConfig;
use crate::domain::foundation::PostNumber;
use crate::domain::post::{BlogPost, LabeledIssue, PUBLISHED_LABEL};
use crate::ports::{PostSource, PostSourceError};

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("lulu-blog/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the GitHub REST API.
pub struct GithubSourceConfig {
    api_base_url: String,
    owner: String,
    repo: String,
    token: Option<SecretString>,
    timeout: Duration,
}

impl GithubSourceConfig {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            owner: owner.into(),
            repo: repo.into(),
            token: None,
            timeout: Duration::from_secs(15),
        }
    }

    /// Builds adapter settings from application configuration.
    pub fn from_config(config: &GithubConfig) -> Self {
        let mut source = Self::new(&config.owner, &config.repo).with_base_url(&config.api_base_url);
        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            source = source.with_token(token);
        }
        source
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn issues_url(&self) -> String {
        format!("{}/repos/{}/{}/issues", self.api_base_url, self.owner, self.repo)
    }
}

/// Post source backed by GitHub Issues.
pub struct GithubPostSource {
    config: GithubSourceConfig,
    client: Client,
}

impl GithubPostSource {
    pub fn new(config: GithubSourceConfig) -> Result<Self, PostSourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| PostSourceError::Network(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn request(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url).header(reqwest::header::ACCEPT, ACCEPT);
        match &self.config.token {
            Some(token) => request.header(
                reqwest::header::AUTHORIZATION,
                format!("token {}", token.expose_secret()),
            ),
            None => request,
        }
    }

    async fn fail(response: reqwest::Response) -> PostSourceError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        tracing::error!(status, error = %message, "GitHub API request failed");
        PostSourceError::Upstream { status, message }
    }
}

#[async_trait]
impl PostSource for GithubPostSource {
    async fn list_published(&self, tag: Option<&str>) -> Result<Vec<BlogPost>, PostSourceError> {
        let labels = match tag {
            Some(tag) => format!("{},{}", PUBLISHED_LABEL, tag),
            None => PUBLISHED_LABEL.to_string(),
        };
        tracing::debug!(labels = %labels, "Listing published issues");

        let response = self
            .request(&self.config.issues_url())
            .query(&[
                ("labels", labels.as_str()),
                ("state", "open"),
                ("sort", "created"),
                ("direction", "desc"),
            ])
            .send()
            .await
            .map_err(|e| PostSourceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }

        let issues: Vec<GithubIssue> = response
            .json()
            .await
            .map_err(|e| PostSourceError::Decode(e.to_string()))?;

        issues
            .into_iter()
            .filter(|issue| !issue.is_pull_request())
            .map(|issue| LabeledIssue::try_from(issue).map(LabeledIssue::into_post))
            .collect()
    }

    async fn get_published(&self, number: PostNumber) -> Result<Option<BlogPost>, PostSourceError> {
        let url = format!("{}/{}", self.config.issues_url(), number);
        tracing::debug!(issue = %number, "Fetching issue");

        let response = self
            .request(&url)
            .send()
            .await
            .map_err(|e| PostSourceError::Network(e.to_string()))?;

        if matches!(response.status(), StatusCode::NOT_FOUND | StatusCode::GONE) {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }

        let issue: GithubIssue = response
            .json()
            .await
            .map_err(|e| PostSourceError::Decode(e.to_string()))?;

        if issue.is_pull_request() {
            return Ok(None);
        }
        let issue = LabeledIssue::try_from(issue)?;
        if !issue.is_published() {
            tracing::debug!(issue = %number, "Issue is not published");
            return Ok(None);
        }
        Ok(Some(issue.into_post()))
    }
}
