//! GitHub configuration (the repository whose issues are blog posts)

use serde::Deserialize;

use super::error::{is_http_url, ValidationError};

/// GitHub Issues configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    /// REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Repository owner
    #[serde(default)]
    pub owner: String,

    /// Repository name
    #[serde(default)]
    pub repo: String,

    /// Optional personal access token (raises rate limits, allows private repos)
    pub token: Option<String>,
}

impl GithubConfig {
    /// Validate GitHub configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.owner.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GITHUB__OWNER"));
        }
        if self.repo.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GITHUB__REPO"));
        }
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidUrl("GITHUB__API_BASE_URL"));
        }
        Ok(())
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            owner: String::new(),
            repo: String::new(),
            token: None,
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}
