//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Archive endpoint base URLs
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {e}", path.display())))?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or fall back to defaults.
    ///
    /// The load error is handed back instead of logged, since callers may
    /// only be able to start logging once the config is known.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<AppError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if let Some(agent) = &self.http.user_agent {
            if agent.trim().is_empty() {
                return Err(AppError::validation("http.user_agent is empty"));
            }
        }
        if self.http.timeout_secs == Some(0) {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        check_endpoint("endpoints.availability_url", &self.endpoints.availability_url)?;
        check_endpoint("endpoints.cdx_url", &self.endpoints.cdx_url)?;
        if !defaults::LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(AppError::validation(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level,
                defaults::LOG_LEVELS
            )));
        }
        Ok(())
    }
}

fn check_endpoint(key: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::validation(format!(
            "{key} must be an http(s) URL, got '{value}'"
        )));
    }
    if url.query().is_some() {
        return Err(AppError::validation(format!(
            "{key} must not carry a query string"
        )));
    }
    Ok(())
}

/// HTTP client settings.
///
/// Both keys are unset by default: requests go out without a User-Agent
/// header and wait for the server indefinitely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for archive requests
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Base URLs of the two archive endpoints, without query strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Availability API
    #[serde(default = "defaults::availability_url")]
    pub availability_url: String,

    /// CDX search API
    #[serde(default = "defaults::cdx_url")]
    pub cdx_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            availability_url: defaults::availability_url(),
            cdx_url: defaults::cdx_url(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: error, warn, info, debug or trace
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

    pub fn availability_url() -> String {
        "https://archive.org/wayback/available".into()
    }
    pub fn cdx_url() -> String {
        "https://web.archive.org/cdx/search/cdx".into()
    }
    pub fn log_level() -> String {
        "info".into()
    }
}
