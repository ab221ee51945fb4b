// File: crates/budget-chart-server/src/error.rs
// Summary: Maps pipeline failures onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use budget_chart::ChartError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Serialize)]
pub struct JsonError {
    pub error_message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Chart(#[from] ChartError),
    #[error("invalid payload: {}", .0.body_text())]
    Payload(#[from] JsonRejection),
    #[error("render task failed {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::Chart(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Payload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.as_status_code();
        if status.is_client_error() {
            warn!("rejected chart request: {self}");
        } else {
            error!("chart request failed: {self}");
        }
        (status, Json(JsonError { error_message: self.to_string() })).into_response()
    }
}
