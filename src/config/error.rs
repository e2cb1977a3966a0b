//! Configuration error types

use thiserror::Error;

/// Environment could not be read into [`super::AppConfig`].
#[derive(Debug, Error)]
#[error("Failed to read configuration: {0}")]
pub struct ConfigError(#[from] config::ConfigError);

/// Semantic problems found by `AppConfig::validate`
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("DATABASE__MAX_CONNECTIONS must be at least 1")]
    InvalidPoolSize,

    #[error("DATABASE__MAX_CONNECTIONS is too large")]
    PoolSizeTooLarge,

    #[error("{0} must be an http(s) URL")]
    InvalidUrl(&'static str),
}

/// Returns true when `value` looks like an absolute http(s) URL.
pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}
