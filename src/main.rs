use anyhow::Context;
use casefile::{HttpServer, RecordStore, ServerConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().context("reading configuration")?;

    let store = match &config.dataset_path {
        Some(path) => RecordStore::load(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => {
            info!("No dataset configured, serving the sample records");
            RecordStore::sample()
        }
    };

    info!("Casefile v{}", casefile::version());

    let server = HttpServer::new(config, Arc::new(store));
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
