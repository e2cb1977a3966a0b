use lulu_blog::config::AppConfig;
use lulu_blog::startup::{self, StartupError};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    startup::init_tracing(&config.server);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    startup::run(config).await.map_err(|e| {
        tracing::error!(error = %e, "Server exited with error");
        e
    })
}
