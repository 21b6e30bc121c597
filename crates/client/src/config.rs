//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `INSIGHTS_API_BASE_URL` - Origin of the external API
//!   (e.g., `https://api.insightssnap.example`)
//!
//! ## Optional
//! - `INSIGHTS_SESSION_DIR` - Directory for persisted sessions
//!   (default: `$HOME/.insights-snap`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin; requests go to `<base_url>/api<path>`.
    pub base_url: String,
    /// Directory holding the per-scope session files.
    pub session_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is missing or not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("INSIGHTS_API_BASE_URL")?;
        let base_url = normalize_base_url(&base_url)?;

        let session_dir = std::env::var("INSIGHTS_SESSION_DIR").map_or_else(
            |_| default_session_dir(),
            PathBuf::from,
        );

        Ok(Self {
            base_url,
            session_dir,
        })
    }
}

/// Validate the base URL and strip any trailing slash so path joins stay
/// predictable.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    Url::parse(raw).map_err(|e| {
        ConfigError::InvalidEnvVar("INSIGHTS_API_BASE_URL".to_string(), e.to_string())
    })?;
    Ok(raw.trim_end_matches('/').to_string())
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn default_session_dir() -> PathBuf {
    std::env::var("HOME").map_or_else(
        |_| PathBuf::from(".insights-snap"),
        |home| PathBuf::from(home).join(".insights-snap"),
    )
}
