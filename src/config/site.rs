//! Site metadata used by the feed and newsletter

use serde::Deserialize;

use super::error::{is_http_url, ValidationError};

/// Public site metadata
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site title
    #[serde(default = "default_name")]
    pub name: String,

    /// Canonical public URL (no trailing slash needed)
    #[serde(default = "default_url")]
    pub url: String,

    /// Feed description
    #[serde(default = "default_description")]
    pub description: String,

    /// Author shown as `dc:creator`
    #[serde(default = "default_author")]
    pub author: String,

    /// Feed language tag
    #[serde(default = "default_language")]
    pub language: String,
}

impl SiteConfig {
    /// Canonical URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate site configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.url) {
            return Err(ValidationError::InvalidUrl("SITE__URL"));
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            url: default_url(),
            description: default_description(),
            author: default_author(),
            language: default_language(),
        }
    }
}

fn default_name() -> String {
    "LinHeMa de Blog".to_string()
}

fn default_url() -> String {
    "https://lulu-ulul.vercel.app".to_string()
}

fn default_description() -> String {
    "A personal tech blog powered by GitHub Issues".to_string()
}

fn default_author() -> String {
    "LinHeMa".to_string()
}

fn default_language() -> String {
    "en-us".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = SiteConfig {
            url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://example.com");
    }

    #[test]
    fn test_invalid_url() {
        let config = SiteConfig {
            url: "example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
