//! abpctl
//!
//! Usage:
//!   abpctl account
//!   abpctl import site "My Site"
//!   abpctl apply policy policy.json --save
//!
//! Credentials come from `--api-id`/`--api-key`, `ABP_API_ID`/`ABP_API_KEY`,
//! or a `--config` JSON file.

use abp_cli::{Cli, load_config, run};
use abp_client::AbpClient;
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    debug!(?config, "Loaded configuration");
    let client = AbpClient::from_config(&config).context("failed to build HTTP client")?;

    let stdout = io::stdout();
    run(&client, &cli.command, &mut stdout.lock())
}

/// Logs go to stderr; stdout carries the JSON result.
fn init_tracing(verbose: bool) {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
        return;
    }

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
