//! Email configuration (Buttondown)

use serde::Deserialize;

use super::error::{is_http_url, ValidationError};

/// Email configuration (Buttondown)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Buttondown emails endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Buttondown API token
    pub buttondown_token: Option<String>,

    /// Shared secret guarding the notify route (`Authorization: Bearer <secret>`)
    pub notify_secret: Option<String>,
}

impl EmailConfig {
    /// Token, treating an empty value as unset
    pub fn token(&self) -> Option<&str> {
        self.buttondown_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Notify secret, treating an empty value as unset
    pub fn secret(&self) -> Option<&str> {
        self.notify_secret.as_deref().filter(|s| !s.is_empty())
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.api_url) {
            return Err(ValidationError::InvalidUrl("EMAIL__API_URL"));
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            buttondown_token: None,
            notify_secret: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.buttondown.email/v1/emails".to_string()
}
