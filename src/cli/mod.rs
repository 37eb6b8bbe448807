//! CLI entry point: parses arguments, merges them over the layered
//! configuration, wires up the admin/telemetry clients, and drives the
//! agent to completion or until cancelled.

pub mod args;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::domain::models::config::Config;
use crate::domain::ports::clock::SystemClock;
use crate::infrastructure::admin_client::HttpAdminClient;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
use crate::infrastructure::telemetry_client::HttpTelemetryOracle;
use crate::services::CycleDriver;

pub use args::Cli;

/// Merge a parsed `Cli` over a loaded `Config`; CLI flags win.
pub fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(url) = &cli.admin_base_url {
        config.admin_base_url = url.clone();
    }
    if let Some(url) = &cli.telemetry_base_url {
        config.telemetry_base_url = url.clone();
    }
    if let Some(secret) = &cli.auth_secret {
        config.auth.secret = Some(secret.clone());
    }
    if let Some(interval) = cli.interval_secs {
        config.polling.interval_secs = interval;
    }
    if cli.once {
        config.polling.once = true;
    }
    if cli.raise_exceptions {
        config.polling.raise_exceptions = true;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    config
}

fn log_config_from(config: &Config) -> Result<LogConfig> {
    let format = match config.logging.format.as_str() {
        "pretty" => LogFormat::Pretty,
        _ => LogFormat::Json,
    };
    Ok(LogConfig {
        level: config.logging.level.clone(),
        format,
        log_dir: config.logging.log_dir.as_ref().map(Into::into),
        enable_stdout: true,
        rotation: RotationPolicy::Daily,
        retention_days: 30,
    })
}

/// Run the agent end to end: load config, initialize logging, drive
/// cycles until `--once` completes or the process is cancelled.
///
/// Returns an error (and a non-zero process exit) on fatal configuration
/// problems, matching §6's "non-zero on fatal configuration error".
pub async fn run(cli: Cli) -> Result<()> {
    let base_config = if let Some(path) = &cli.config_file {
        ConfigLoader::load_from_file(path).context("failed to load --config-file")?
    } else {
        ConfigLoader::load().context("failed to load configuration")?
    };
    let config = apply_overrides(base_config, &cli);
    ConfigLoader::validate(&config).context("configuration is invalid")?;

    let _logger = LoggerImpl::init(&log_config_from(&config)?)?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .build()
        .context("failed to build HTTP client")?;

    let admin = Arc::new(HttpAdminClient::new(
        http_client.clone(),
        config.admin_base_url.clone(),
        config.auth.secret.clone(),
    ));
    let telemetry = Arc::new(HttpTelemetryOracle::new(
        http_client,
        config.telemetry_base_url.clone(),
    ));
    let clock = Arc::new(SystemClock);

    let driver = CycleDriver::new(admin, telemetry, clock, config.polling.raise_exceptions);

    if config.polling.once {
        driver.run_once().await.context("cycle failed")?;
    } else {
        driver
            .run_forever(
                Duration::from_secs(config.polling.interval_secs),
                async {
                    let _ = tokio::signal::ctrl_c().await;
                },
            )
            .await
            .context("agent loop failed")?;
    }

    Ok(())
}
