//! Weather source port - forecast passthrough.

use async_trait::async_trait;
use thiserror::Error;

/// Fetches the current forecast as opaque JSON.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn forecast(&self) -> Result<serde_json::Value, WeatherError>;
}

/// Errors from the weather provider.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather API token is not configured")]
    NotConfigured,

    #[error("Weather request failed: {0}")]
    Network(String),

    #[error("Weather API error: {0}")]
    Upstream(u16),

    #[error("Failed to decode weather response: {0}")]
    Decode(String),
}
