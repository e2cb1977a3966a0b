//! Supabase configuration (hosted comments table)

use serde::Deserialize;

use super::error::{is_http_url, ValidationError};

/// Supabase project configuration.
///
/// Every field is optional; a missing value surfaces as a request-time
/// error on the comment routes rather than a startup failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: Option<String>,

    /// Secret (service role) key used for writes
    #[serde(alias = "service_role_key")]
    pub secret_key: Option<String>,

    /// Publishable (anon) key used for reads
    pub publishable_key: Option<String>,
}

impl SupabaseConfig {
    /// Validate Supabase configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() && !is_http_url(url) => {
                Err(ValidationError::InvalidUrl("SUPABASE__URL"))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_valid() {
        assert!(SupabaseConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let config = SupabaseConfig {
            url: Some("xyz.supabase.co".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_valid_url() {
        let config = SupabaseConfig {
            url: Some("https://xyz.supabase.co".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
