//! Configuration loaded from environment variables.
//!
//! Loaded once at startup, before any network activity.
//!
//! ## Required Variables
//!
//! - `VK_ACCESS_TOKEN` - VK API access token
//!
//! ## Optional Variables
//!
//! - `VK_API_BASE_URL` - Method endpoint base (default: `https://api.vk.com/method`)
//! - `VK_API_VERSION` - Value of the `v` parameter (default: `5.199`)
//! - `VK_REQUEST_TIMEOUT` - Request timeout in seconds (default: 30, max: 300)
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! Values may come from a `.env` file; see `main.rs` for the lookup order.

use crate::domain::entities::AccessToken;
use crate::error::AppError;
use std::env;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.vk.com/method";
pub const DEFAULT_API_VERSION: &str = "5.199";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: AccessToken,
    pub api_base_url: String,
    pub api_version: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if `VK_ACCESS_TOKEN` is missing or
    /// blank, or `VK_REQUEST_TIMEOUT` is not a number.
    pub fn from_env() -> Result<Self, AppError> {
        let access_token = env::var("VK_ACCESS_TOKEN")
            .map_err(|_| {
                AppError::configuration(
                    "VK_ACCESS_TOKEN not found! Check the .env file or environment variables.",
                )
            })
            .and_then(AccessToken::new)?;

        let api_base_url =
            env::var("VK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_version =
            env::var("VK_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let request_timeout_secs = match env::var("VK_REQUEST_TIMEOUT") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                AppError::configuration(format!(
                    "VK_REQUEST_TIMEOUT must be a number of seconds, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            access_token,
            api_base_url,
            api_version,
            request_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if:
    /// - `api_base_url` is not an absolute `http`/`https` URL
    /// - `api_version` is empty
    /// - `request_timeout_secs` is outside 1..=300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<(), AppError> {
        let base = Url::parse(&self.api_base_url).map_err(|e| {
            AppError::configuration(format!(
                "VK_API_BASE_URL is not a valid URL ('{}'): {e}",
                self.api_base_url
            ))
        })?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(AppError::configuration(format!(
                "VK_API_BASE_URL must use http or https, got '{}'",
                self.api_base_url
            )));
        }

        if self.api_version.trim().is_empty() {
            return Err(AppError::configuration("VK_API_VERSION must not be empty"));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(AppError::configuration(format!(
                "VK_REQUEST_TIMEOUT must be between 1 and 300, got {}",
                self.request_timeout_secs
            )));
        }

        if self.log_format != "text" && self.log_format != "json" {
            return Err(AppError::configuration(format!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            )));
        }

        Ok(())
    }

    /// Logs a configuration summary with the token masked.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Access token: {}", self.access_token.masked());
        tracing::debug!("  API base URL: {}", self.api_base_url);
        tracing::debug!("  API version: {}", self.api_version);
        tracing::debug!("  Request timeout: {}s", self.request_timeout_secs);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// Expects `.env` files to be loaded already (see `main.rs`).
pub fn load_from_env() -> Result<Config, AppError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
