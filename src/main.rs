use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rd_credit_engine::api::{AppState, ENGINE_VERSION, create_router};
use rd_credit_engine::config::{ConfigLoader, EngineConfig};

/// Serve federal R&D tax credit estimates over HTTP
#[derive(Parser)]
#[command(name = "rd-credit-engine", version, long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "RD_CREDIT_BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Directory holding credit.yaml and pricing.yaml (built-in values when omitted)
    #[arg(long, env = "RD_CREDIT_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config_dir {
        Some(dir) => {
            let config = ConfigLoader::load(dir)
                .with_context(|| format!("loading configuration from {}", dir.display()))?
                .into_config();
            info!(config_dir = %dir.display(), "Loaded configuration");
            config
        }
        None => {
            info!("Using built-in configuration");
            EngineConfig::default()
        }
    };

    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    info!(address = %cli.bind, version = ENGINE_VERSION, "R&D credit engine listening");

    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
