//! Process wiring: tracing, adapters, router state and the server loop.

use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::adapters::http::{build_router, AppState};
use crate::adapters::postgres;
use crate::adapters::{
    ButtondownEmailSender, CwaWeatherSource, GithubPostSource, GithubSourceConfig,
    PostgresCommentStore, PulldownMarkdownRenderer, SupabaseClients, SupabaseCommentStore,
};
use crate::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use crate::ports::{CommentStore, EmailError, EmailSender, PostSourceError, WeatherError};

/// Failures that stop the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),

    #[error("Failed to build GitHub client: {0}")]
    Github(#[from] PostSourceError),

    #[error("Failed to build email client: {0}")]
    Email(#[from] EmailError),

    #[error("Failed to build weather client: {0}")]
    Weather(#[from] WeatherError),

    #[error("Database setup failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Installs the global subscriber. `RUST_LOG` wins over `server.log_level`;
/// production logs are JSON.
pub fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Builds every adapter from configuration.
///
/// Comments go to Postgres when `database.url` is set, else to Supabase.
/// Missing provider credentials are not fatal here; the affected routes
/// report them per request.
pub async fn build_state(config: &AppConfig) -> Result<AppState, StartupError> {
    let posts = Arc::new(GithubPostSource::new(GithubSourceConfig::from_config(&config.github))?);

    let comments: Arc<dyn CommentStore> = match postgres::connect(&config.database).await? {
        Some(pool) => {
            tracing::info!("Comments stored in Postgres");
            Arc::new(PostgresCommentStore::new(pool))
        }
        None => {
            tracing::info!("Comments stored through Supabase REST");
            Arc::new(SupabaseCommentStore::new(SupabaseClients::new(config.supabase.clone())))
        }
    };

    let email = match config.email.token() {
        Some(token) => {
            let sender = ButtondownEmailSender::new(
                config.email.api_url.clone(),
                SecretString::new(token.to_string()),
            )?;
            Some(Arc::new(sender) as Arc<dyn EmailSender>)
        }
        None => {
            tracing::warn!("BUTTONDOWN_TOKEN not set; /api/notify will fail");
            None
        }
    };

    let weather = Arc::new(CwaWeatherSource::from_config(&config.weather)?);

    Ok(AppState {
        posts,
        comments,
        weather,
        renderer: Arc::new(PulldownMarkdownRenderer::new()),
        email,
        notify_secret: config
            .email
            .secret()
            .map(|s| Arc::new(SecretString::new(s.to_string()))),
        site: config.site.clone(),
    })
}

/// Binds and serves until Ctrl-C or SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&config).await?;
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
