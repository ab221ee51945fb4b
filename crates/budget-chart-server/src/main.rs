// File: crates/budget-chart-server/src/main.rs
// Summary: Binary entry point: logging, configuration, listener.

use anyhow::{Context, Result};
use budget_chart_server::{app, ServerConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    info!(addr = %config.addr, body_limit = config.body_limit, "budget chart server listening");

    axum::serve(listener, app(&config)).await.context("serving http")?;
    Ok(())
}
