use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("admin_base_url must not be empty")]
    EmptyAdminBaseUrl,

    #[error("telemetry_base_url must not be empty")]
    EmptyTelemetryBaseUrl,

    #[error("invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("polling interval_secs must be greater than zero")]
    ZeroPollingInterval,
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (`Serialized`)
    /// 2. `.balrog-agent/config.yaml` (optional)
    /// 3. Environment variables (`BALROG_AGENT_` prefix, `__` nesting separator)
    ///
    /// CLI flags are merged on top of this by the caller (`cli::args`),
    /// since `figment` doesn't see `clap`'s parsed values directly.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".balrog-agent/config.yaml"))
            .merge(Env::prefixed("BALROG_AGENT_").split("__"))
            .extract()
            .context("failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, primarily for tests.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("BALROG_AGENT_").split("__"))
            .extract()
            .with_context(|| format!("failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.admin_base_url.is_empty() {
            return Err(ConfigError::EmptyAdminBaseUrl);
        }
        if config.telemetry_base_url.is_empty() {
            return Err(ConfigError::EmptyTelemetryBaseUrl);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.polling.interval_secs == 0 {
            return Err(ConfigError::ZeroPollingInterval);
        }

        Ok(())
    }
}
