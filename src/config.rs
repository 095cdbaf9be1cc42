//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_STATE_DIR: &str = ".github-stats-dashboard";
const DEFAULT_BANNER_TIMEOUT_SECS: u64 = 5;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the stats backend (`/api/stats`, `/api/compare`, `/api/health`)
    pub api_base_url: String,
    /// Page URL handed out by the "copy link" export choice
    pub page_url: String,
    /// Directory holding the persisted local-storage file
    pub state_dir: PathBuf,
    /// How long an error banner stays up
    pub banner_timeout: Duration,
    /// Emit logs as JSON instead of the compact text format
    pub log_json: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_url: DEFAULT_API_URL.to_string(),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            banner_timeout: Duration::from_secs(DEFAULT_BANNER_TIMEOUT_SECS),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("STATS_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        validate_url("STATS_API_URL", &api_base_url)?;

        let page_url = env::var("DASHBOARD_PAGE_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| api_base_url.clone());
        validate_url("DASHBOARD_PAGE_URL", &page_url)?;

        let banner_secs = match env::var("BANNER_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("BANNER_TIMEOUT_SECS", raw))?,
            Err(_) => DEFAULT_BANNER_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            page_url,
            state_dir: env::var("DASHBOARD_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_DIR)),
            banner_timeout: Duration::from_secs(banner_secs),
            log_json: env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }
}

fn validate_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    reqwest::Url::parse(value)
        .map(|_| ())
        .map_err(|_| ConfigError::Invalid(name, value.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
