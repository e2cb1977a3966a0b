//! Weather configuration (CWA open data)

use serde::Deserialize;

use super::error::{is_http_url, ValidationError};

/// Central Weather Administration open-data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// Datastore base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Authorization token
    pub token: Option<String>,

    /// Dataset identifier (36-hour forecast)
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Location name filter
    #[serde(default = "default_location")]
    pub location: String,

    /// Maximum number of records
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl WeatherConfig {
    /// Validate weather configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidUrl("WEATHER__API_BASE_URL"));
        }
        if self.dataset.trim().is_empty() {
            return Err(ValidationError::MissingRequired("WEATHER__DATASET"));
        }
        Ok(())
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            token: None,
            dataset: default_dataset(),
            location: default_location(),
            limit: default_limit(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://opendata.cwa.gov.tw/api/v1/rest/datastore".to_string()
}

fn default_dataset() -> String {
    "F-C0032-001".to_string()
}

fn default_location() -> String {
    "臺北市".to_string()
}

fn default_limit() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.dataset, "F-C0032-001");
        assert_eq!(config.location, "臺北市");
        assert_eq!(config.limit, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let config = WeatherConfig {
            dataset: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
