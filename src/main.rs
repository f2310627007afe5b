//! Countryscope Dashboard Server
//!
//! Run with: cargo run --bin countryscope
//!
//! # Configuration
//!
//! Read from `--config`, or the first of `~/.config/countryscope/config.toml`,
//! `/etc/countryscope/config.toml` and `./config.toml`. Environment variables:
//! - `COUNTRYSCOPE_DATASET`: CSV URL or path
//! - `COUNTRYSCOPE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COUNTRYSCOPE_PORT`: Port to listen on (default: 8050)
//! - `COUNTRYSCOPE_PIE_SCOPE`: all_rows or latest_snapshot
//! - `COUNTRYSCOPE_LOG_LEVEL`, `COUNTRYSCOPE_LOG_FORMAT`
//! - `RUST_LOG`: Full filter directive, overrides the log level

use anyhow::Context;
use clap::Parser;
use countryscope::api::{serve, AppState};
use countryscope::config::{Config, LoggingConfig};
use countryscope::dashboard::Dispatcher;
use countryscope::dataset::load_table;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "countryscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive country comparison dashboard")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset URL or CSV path
    #[arg(short, long)]
    dataset: Option<String>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dataset) = args.dataset {
        config.dataset.source = dataset;
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Countryscope v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Loading dataset from {}", config.dataset.source);

    let table = load_table(&config.dataset.source, config.dataset.fetch_timeout())
        .await
        .with_context(|| format!("Failed to load dataset from {}", config.dataset.source))?;
    tracing::info!("Dataset ready: {}", table.summary());

    let dispatcher = Dispatcher::new(Arc::new(table), config.charts.settings())?
        .with_default_countries(config.charts.default_countries.clone());

    let state = AppState::new(Arc::new(dispatcher), config.api.clone());
    serve(state, &config.api).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
