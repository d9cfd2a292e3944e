//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Sundown API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Token provider configuration
    pub recaptcha: RecaptchaConfig,

    /// Form configuration
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Sundown API base URL
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecaptchaConfig {
    /// Endpoint issuing one-time submission tokens
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    /// Public site key registered with the provider
    pub site_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Live formatting is scoped to this region while the selector matches
    /// it and unscoped otherwise
    #[serde(default = "default_region")]
    pub default_region: String,

    /// How long the success banner stays visible
    #[serde(default = "default_success_delay", with = "humantime_serde")]
    pub success_delay: Duration,

    /// How long the error banner stays visible
    #[serde(default = "default_error_delay", with = "humantime_serde")]
    pub error_delay: Duration,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_region: default_region(),
            success_delay: default_success_delay(),
            error_delay: default_error_delay(),
            log_level: default_log_level(),
        }
    }
}

fn default_api_url() -> String {
    "https://moysauce18.pythonanywhere.com".into()
}

fn default_provider_url() -> String {
    "http://recaptcha-broker:8080".into()
}

fn default_region() -> String {
    "US".into()
}

fn default_success_delay() -> Duration {
    Duration::from_secs(5)
}

fn default_error_delay() -> Duration {
    Duration::from_secs(3)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // try_parsing(true) would read +12015550123 as a positive
                    // number and strip the +. Keep strings as strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
