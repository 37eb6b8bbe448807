//! `run-agent` CLI entry point.

use anyhow::Result;
use clap::Parser;
use enactment_agent::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli).await
}
