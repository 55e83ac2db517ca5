//! Maintenance tool for the currency metadata table.
//!
//! Refreshes `scripts/currency/currency_data.csv` from the ISO 4217 registry,
//! then regenerates `currency_data.rs` from the snapshot and template. Any
//! stage failure aborts the run with a diagnostic naming the stage.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use currency_codegen::{codegen, registry, snapshot, CodegenConfig};

#[derive(Parser)]
#[command(name = "currency-codegen")]
#[command(about = "Refresh the ISO 4217 snapshot and regenerate currency_data.rs")]
struct Cli {
    /// Registry endpoint serving the ISO 4217 list-one XML
    #[arg(long)]
    registry_url: Option<String>,

    /// CSV snapshot path
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Handlebars template path
    #[arg(long)]
    template: Option<PathBuf>,

    /// Generated source destination
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip the registry fetch and regenerate from the existing snapshot
    #[arg(long)]
    offline: bool,
}

impl Cli {
    fn into_config(self) -> (CodegenConfig, bool) {
        let mut config = CodegenConfig::default();
        if let Some(url) = self.registry_url {
            config.registry_url = url;
        }
        if let Some(path) = self.snapshot {
            config.snapshot_path = path;
        }
        if let Some(path) = self.template {
            config.template_path = path;
        }
        if let Some(path) = self.output {
            config.output_path = path;
        }
        (config, self.offline)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let (config, offline) = Cli::parse().into_config();

    if !offline {
        registry::refresh_snapshot(&config)
            .await
            .context("refreshing currency snapshot")?;
    }

    let rows =
        snapshot::load_snapshot(&config.snapshot_path).context("reading snapshot CSV")?;
    let records = snapshot::order_records(rows);

    let code =
        codegen::render(&config.template_path, &records).context("generating Rust source")?;
    codegen::persist(&config.output_path, &code).context("writing generated source")?;

    Ok(())
}
