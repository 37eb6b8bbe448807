//! CLI argument definitions for the single `run-agent` command.

use clap::Parser;

/// Autonomous enactment agent: polls the admin service, decides which
/// scheduled changes are ready, and dispatches their enactment.
#[derive(Parser, Debug)]
#[command(name = "run-agent")]
#[command(about = "Poll the admin service and enact ready scheduled changes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the admin service.
    #[arg(long, env = "BALROG_AGENT_ADMIN_BASE_URL")]
    pub admin_base_url: Option<String>,

    /// Base URL of the telemetry service.
    #[arg(long, env = "BALROG_AGENT_TELEMETRY_BASE_URL")]
    pub telemetry_base_url: Option<String>,

    /// Bearer token for authenticating against the admin service.
    #[arg(long, env = "BALROG_AGENT_AUTH_SECRET", hide_env_values = true)]
    pub auth_secret: Option<String>,

    /// Seconds to sleep between polling cycles.
    #[arg(long)]
    pub interval_secs: Option<u64>,

    /// Run exactly one cycle then exit, instead of polling continuously.
    #[arg(long)]
    pub once: bool,

    /// Propagate the first error from a cycle instead of logging and
    /// continuing. Intended for diagnostics and integration tests.
    #[arg(long, hide = true)]
    pub raise_exceptions: bool,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format: json or pretty.
    #[arg(long)]
    pub log_format: Option<String>,

    /// Optional path to a YAML config file, merged under env vars and
    /// above programmatic defaults.
    #[arg(long)]
    pub config_file: Option<std::path::PathBuf>,
}
