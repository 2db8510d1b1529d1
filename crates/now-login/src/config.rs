//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Registration service configuration
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Credential storage configuration
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// CLI configuration
    #[serde(default)]
    pub cli: CliConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Account service endpoint
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Delay between verification checks
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,

    /// Per-request timeout
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsConfig {
    /// Credentials file override; defaults to `.now.json` in the home
    /// directory when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Terms of service URL shown in the consent notice
    #[serde(default = "default_terms_url")]
    pub terms_url: String,

    /// Privacy policy URL shown in the consent notice
    #[serde(default = "default_privacy_url")]
    pub privacy_url: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default implementations
impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            poll_interval: default_poll_interval(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            terms_url: default_terms_url(),
            privacy_url: default_privacy_url(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions
fn default_service_url() -> String {
    "https://api.zeit.co".into()
}

fn default_poll_interval() -> Duration {
    login_flow::DEFAULT_POLL_INTERVAL
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_terms_url() -> String {
    "https://zeit.co/terms".into()
}

fn default_privacy_url() -> String {
    "https://zeit.co/privacy".into()
}

fn default_log_level() -> String {
    "warn".into()
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
                    // Keep strings as strings; durations are humantime.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.registration.service_url, "https://api.zeit.co");
        assert_eq!(
            config.registration.poll_interval,
            Duration::from_millis(2500)
        );
        assert!(config.credentials.path.is_none());
        assert_eq!(config.cli.log_level, "warn");
    }
}
