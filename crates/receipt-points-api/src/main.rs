use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use receipt_points_api::{run_server, ApiConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::parse();
    tracing::debug!(?config, "starting");

    run_server(config).await.map_err(|e| anyhow::anyhow!(e))
}
