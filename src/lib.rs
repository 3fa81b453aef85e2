pub mod api;
pub mod chat;
pub mod completion;
pub mod config;
pub mod core_state;
pub mod db;
pub mod models;
pub mod triage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::completion::{ChatCompletion, CompletionError, GroqClient};
use crate::config::{AppConfig, ConfigError};
use crate::core_state::CoreState;
use crate::db::DatabaseError;

/// Anything that stops the service before it serves its first request.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot open record store: {0}")]
    Database(#[from] DatabaseError),
    #[error("cannot build completion client: {0}")]
    Completion(#[from] CompletionError),
    #[error(transparent)]
    Server(#[from] api::ServerError),
    #[error("cannot listen for shutdown signal: {0}")]
    Signal(#[source] std::io::Error),
}

pub async fn run() -> Result<(), StartupError> {
    // A missing .env is normal outside local dev
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let settings = AppConfig::from_env()?;

    let conn = db::open_database(&settings.db_path)?;
    tracing::info!(path = %settings.db_path.display(), "Record store ready");

    let mut core = CoreState::new(conn);
    match settings.completion {
        Some(completion) => {
            let client = GroqClient::from_config(completion)?;
            tracing::info!(
                model = client.model(),
                endpoint = client.endpoint(),
                "AI replies enabled"
            );
            core = core.with_completion(Arc::new(client));
        }
        None => tracing::warn!("GROQ_API_KEY not set, replies come from the local symptom matcher"),
    }

    let frontend_dir = if settings.frontend_dir.is_dir() {
        Some(settings.frontend_dir)
    } else {
        tracing::warn!(
            path = %settings.frontend_dir.display(),
            "Frontend directory not found, serving API only"
        );
        None
    };

    let mut server =
        api::start_api_server(Arc::new(core), settings.bind_addr, frontend_dir).await?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    tokio::signal::ctrl_c().await.map_err(StartupError::Signal)?;
    tracing::info!("Shutdown requested");

    server.shutdown();
    server.wait().await;
    Ok(())
}
