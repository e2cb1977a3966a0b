//! CWA implementation of the `WeatherSource` port.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::config::WeatherConfig;
use crate::ports::{WeatherError, WeatherSource};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches the 36-hour forecast dataset and returns it untouched.
pub struct CwaWeatherSource {
    api_base_url: String,
    dataset: String,
    location: String,
    limit: u32,
    token: Option<SecretString>,
    client: Client,
}

impl CwaWeatherSource {
    pub fn from_config(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;
        Ok(Self {
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            dataset: config.dataset.clone(),
            location: config.location.clone(),
            limit: config.limit,
            token: config
                .token
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(|t| SecretString::new(t.to_string())),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.api_base_url, self.dataset)
    }
}

#[async_trait]
impl WeatherSource for CwaWeatherSource {
    async fn forecast(&self) -> Result<serde_json::Value, WeatherError> {
        let token = self.token.as_ref().ok_or(WeatherError::NotConfigured)?;
        let limit = self.limit.to_string();

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("Authorization", token.expose_secret().as_str()),
                ("limit", limit.as_str()),
                ("format", "JSON"),
                ("locationName", self.location.as_str()),
                ("sort", "time"),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Weather API request failed");
            return Err(WeatherError::Upstream(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()))
    }
}
