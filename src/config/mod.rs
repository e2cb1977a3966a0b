//! Typed settings read from the environment.
//!
//! Every key lives under the `BLOG` prefix with `__` between levels, e.g.
//! `BLOG__GITHUB__OWNER` or `BLOG__SUPABASE__SECRET_KEY`. A `.env` file is
//! honoured in development.
//!
//! ```no_run
//! use lulu_blog::config::AppConfig;
//!
//! let config = AppConfig::load().expect("environment readable");
//! config.validate().expect("settings valid");
//! ```

mod database;
mod email;
mod error;
mod github;
mod server;
mod site;
mod supabase;
mod weather;

pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use github::GithubConfig;
pub use server::{Environment, ServerConfig};
pub use site::SiteConfig;
pub use supabase::SupabaseConfig;
pub use weather::WeatherConfig;

use serde::Deserialize;

/// Every settings section, one field per `BLOG__<SECTION>__*` group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, logging and CORS
    #[serde(default)]
    pub server: ServerConfig,

    /// GitHub repository whose issues are the posts
    #[serde(default)]
    pub github: GithubConfig,

    /// Supabase comments table
    #[serde(default)]
    pub supabase: SupabaseConfig,

    /// Optional direct Postgres connection for comments
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Email configuration (Buttondown)
    #[serde(default)]
    pub email: EmailConfig,

    /// Weather open-data API
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Public site metadata
    #[serde(default)]
    pub site: SiteConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the `BLOG__*` environment.
    ///
    /// `BLOG__SERVER__PORT=8080` becomes `server.port = 8080`. Only type
    /// errors fail here; call [`AppConfig::validate`] for semantic checks.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BLOG")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section. Provider credentials stay optional; routes
    /// that need a missing one answer 500 at request time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.github.validate()?;
        self.supabase.validate()?;
        self.database.validate()?;
        self.email.validate()?;
        self.weather.validate()?;
        self.site.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
