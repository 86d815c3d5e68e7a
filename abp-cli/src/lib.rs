//! `abpctl`: drives bot-management resource lifecycles from the command line.
//!
//! Resources are read from and printed as JSON: the entity's state fields with
//! its remote `id` alongside once bound.

use abp_client::{AbpClient, ClientConfig, Transport};
use abp_resource::{
    AccountResource, DomainResource, Lifecycle, PolicyResource, SiteResource, Tracked, apply, plan,
};
use abp_types::{EntityKind, ResourceId, StructuredId};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "abpctl")]
#[command(about = "Import, inspect and converge bot-management entities")]
pub struct Cli {
    /// JSON file holding a client configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, env = "ABP_BASE_URL")]
    pub base_url: Option<String>,

    /// API id, sent as x-API-Id
    #[arg(long, env = "ABP_API_ID")]
    pub api_id: Option<String>,

    /// API key, sent as x-API-Key
    #[arg(long, env = "ABP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the account the credentials belong to
    Account,

    /// Import by ID, or by exact name (sites and policies)
    Import { kind: EntityKind, id: String },

    /// Read one entity by ID
    Get { kind: EntityKind, id: String },

    /// Show what apply would do for a resource file
    Plan { kind: EntityKind, file: PathBuf },

    /// Create or update the remote to match a resource file
    Apply {
        kind: EntityKind,
        file: PathBuf,

        /// Write the resulting resource back to the file
        #[arg(long)]
        save: bool,
    },

    /// Delete one entity by ID
    Delete { kind: EntityKind, id: String },
}

/// Builds the client configuration: file first, then flags and environment.
pub fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => ClientConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(api_id) = &cli.api_id {
        config.api_id.clone_from(api_id);
    }
    if let Some(api_key) = &cli.api_key {
        config.api_key.clone_from(api_key);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    if config.api_id.is_empty() || config.api_key.is_empty() {
        bail!(
            "missing API credentials: pass --api-id and --api-key or set ABP_API_ID and ABP_API_KEY"
        );
    }
    Ok(config)
}

/// Runs one command, writing its JSON result to `out`.
pub fn run<T: Transport>(
    client: &AbpClient<T>,
    command: &Command,
    out: &mut impl Write,
) -> Result<()> {
    let kind = match command {
        Command::Account => {
            let accounts = AccountResource::new(client);
            let mut tracked = Tracked::default();
            accounts
                .create(&mut tracked)
                .context("failed to discover account")?;
            return print(out, &tracked);
        }
        Command::Import { kind, .. }
        | Command::Get { kind, .. }
        | Command::Plan { kind, .. }
        | Command::Apply { kind, .. }
        | Command::Delete { kind, .. } => *kind,
    };

    match kind {
        EntityKind::Account => dispatch(&AccountResource::new(client), command, out),
        EntityKind::Domain => dispatch(&DomainResource::new(client), command, out),
        EntityKind::Policy => dispatch(&PolicyResource::new(client), command, out),
        EntityKind::Site => dispatch(&SiteResource::new(client), command, out),
    }
}

fn dispatch<L>(lifecycle: &L, command: &Command, out: &mut impl Write) -> Result<()>
where
    L: Lifecycle,
    L::State: Serialize + DeserializeOwned,
{
    match command {
        Command::Account => Ok(()),
        Command::Import { id, .. } => {
            let imported = lifecycle
                .import(&ResourceId::classify(id))
                .with_context(|| format!("failed to import {} '{id}'", L::KIND))?;
            for resource in &imported {
                report_anomalies(resource);
            }
            info!(kind = %L::KIND, count = imported.len(), "Imported");
            print(out, &imported)
        }
        Command::Get { id, .. } => {
            let mut tracked = Tracked::bound(parse_id(L::KIND, id)?, L::State::default());
            lifecycle
                .read(&mut tracked)
                .with_context(|| format!("failed to read {} {id}", L::KIND))?;
            report_anomalies(&tracked);
            print(out, &tracked)
        }
        Command::Plan { file, .. } => {
            let tracked: Tracked<L::State> = read_resource(file)?;
            let plan = plan(lifecycle, &tracked)
                .with_context(|| format!("failed to plan {}", L::KIND))?;
            print(out, &json!({ "plan": plan }))
        }
        Command::Apply { file, save, .. } => {
            let mut tracked: Tracked<L::State> = read_resource(file)?;
            let done = apply(lifecycle, &mut tracked)
                .with_context(|| format!("failed to apply {}", L::KIND))?;
            report_anomalies(&tracked);
            if *save {
                write_resource(file, &tracked)?;
            }
            print(out, &json!({ "applied": done, "resource": tracked }))
        }
        Command::Delete { id, .. } => {
            let mut tracked = Tracked::bound(parse_id(L::KIND, id)?, L::State::default());
            lifecycle
                .delete(&mut tracked)
                .with_context(|| format!("failed to delete {} {id}", L::KIND))?;
            print(out, &json!({ "deleted": id }))
        }
    }
}

fn parse_id(kind: EntityKind, raw: &str) -> Result<StructuredId> {
    StructuredId::parse(raw).with_context(|| format!("invalid {kind} ID"))
}

fn report_anomalies<S>(tracked: &Tracked<S>) {
    for anomaly in &tracked.anomalies {
        warn!(id = ?tracked.id(), %anomaly, "remote entity is irregular");
    }
}

fn read_resource<S: DeserializeOwned>(path: &Path) -> Result<Tracked<S>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read resource {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse resource {}", path.display()))
}

fn write_resource<S: Serialize>(path: &Path, tracked: &Tracked<S>) -> Result<()> {
    let json = serde_json::to_string_pretty(tracked)?;
    fs::write(path, json + "\n").with_context(|| format!("failed to write {}", path.display()))
}

fn print<V: Serialize + ?Sized>(out: &mut impl Write, value: &V) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
