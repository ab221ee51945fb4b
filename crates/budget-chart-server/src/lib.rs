// File: crates/budget-chart-server/src/lib.rs
// Summary: Router, configuration and handlers for the chart HTTP endpoint.

pub mod error;
pub mod handlers;

use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use clap::Parser;

/// Server configuration; every flag also reads from the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "budget-chart-server", version)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "BUDGET_CHART_ADDR", default_value = "0.0.0.0:8000")]
    pub addr: SocketAddr,

    /// Maximum request body in bytes (backgrounds arrive base64-encoded).
    #[arg(long, env = "BUDGET_CHART_BODY_LIMIT", default_value_t = 32 * 1024 * 1024)]
    pub body_limit: usize,
}

pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/grafico", post(handlers::render_png))
        .route("/chart", post(handlers::render_png))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(config.body_limit))
}
