use serde::{Deserialize, Serialize};

/// Top-level configuration for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Base URL of the admin service, e.g. `https://aus5.mozilla.org/api`.
    pub admin_base_url: String,

    /// Base URL of the telemetry service that answers uptake queries.
    pub telemetry_base_url: String,

    /// Credential configuration for the admin service.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Polling configuration.
    #[serde(default)]
    pub polling: PollingConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP client configuration.
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_base_url: String::new(),
            telemetry_base_url: String::new(),
            auth: AuthConfig::default(),
            polling: PollingConfig::default(),
            logging: LoggingConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

/// Authentication material for the admin service.
///
/// Resolving the actual secret value (env var, file, or CLI flag) is the
/// CLI layer's job; this struct only carries the resolved material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthConfig {
    /// Hawk/bearer auth user id, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Shared secret or bearer token. Never logged in full.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            secret: None,
        }
    }
}

/// Polling cadence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PollingConfig {
    /// Seconds to sleep between cycles in continuous mode.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Run exactly one cycle then exit. Overridden by `--once`.
    #[serde(default)]
    pub once: bool,

    /// Propagate the first error encountered during a cycle instead of
    /// logging and continuing. Used by integration tests and diagnostics.
    #[serde(default)]
    pub raise_exceptions: bool,
}

const fn default_interval_secs() -> u64 {
    60
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            once: false,
            raise_exceptions: false,
        }
    }
}

/// Logging configuration, layered under `infrastructure::logging`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty.
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rotated log files. Stdout-only if absent.
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

/// HTTP client tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}
