// File: crates/budget-chart-server/src/handlers.rs
// Summary: Request handlers. Rendering is CPU-bound, so it runs on the blocking pool.

use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use budget_chart::ChartRequest;
use tracing::info;

use crate::error::ApiError;

pub async fn render_png(payload: Result<Json<ChartRequest>, JsonRejection>) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let bytes = tokio::task::spawn_blocking(move || {
        let (items, settings) = req.into_parts()?;
        budget_chart::render_chart(&items, &settings)
    })
    .await??;
    info!(bytes = bytes.len(), "chart rendered");
    Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
}

pub async fn health() -> &'static str {
    "ok"
}
