//! Application constants and environment-driven settings.
//!
//! Settings load once at startup. In local dev a `.env` file is read first
//! (see `crate::run`). The completion key is wrapped in `SecretString` so it
//! never ends up in a `Debug` dump or a log line.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

/// Application-level constants
pub const APP_NAME: &str = "MedAssist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_DB_PATH: &str = "medical.db";
pub const DEFAULT_FRONTEND_DIR: &str = "frontend";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,medassist_lib=debug,tower_http=info"
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for the external chat-completion endpoint.
#[derive(Debug)]
pub struct CompletionConfig {
    pub api_key: SecretString,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

/// Full service configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub frontend_dir: PathBuf,
    /// `None` when no API key is configured: replies come from the local matcher.
    pub completion: Option<CompletionConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset, so `GROQ_API_KEY=` in a .env disables the AI path
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_raw = var("MEDASSIST_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                name: "MEDASSIST_BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        let timeout_secs = match var("MEDASSIST_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        name: "MEDASSIST_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be at least 1".into(),
                    })
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "MEDASSIST_TIMEOUT_SECS",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_COMPLETION_TIMEOUT_SECS,
        };

        let completion = var("GROQ_API_KEY").map(|key| CompletionConfig {
            api_key: SecretString::from(key),
            endpoint: var("GROQ_API_URL").unwrap_or_else(|| DEFAULT_COMPLETION_URL.into()),
            model: var("GROQ_MODEL").unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.into()),
            timeout: Duration::from_secs(timeout_secs),
        });

        Ok(Self {
            bind_addr,
            db_path: var("MEDASSIST_DB_PATH")
                .unwrap_or_else(|| DEFAULT_DB_PATH.into())
                .into(),
            frontend_dir: var("MEDASSIST_FRONTEND_DIR")
                .unwrap_or_else(|| DEFAULT_FRONTEND_DIR.into())
                .into(),
            completion,
        })
    }
}
