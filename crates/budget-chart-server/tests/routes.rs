// File: crates/budget-chart-server/tests/routes.rs
// Purpose: Handler behavior: PNG responses, status mapping and configuration defaults.

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use budget_chart::{ChartError, ChartRequest};
use budget_chart_server::error::ApiError;
use budget_chart_server::handlers::{health, render_png};
use budget_chart_server::ServerConfig;
use clap::Parser;
use serde_json::json;

fn request(v: serde_json::Value) -> Result<Json<ChartRequest>, JsonRejection> {
    Ok(Json(serde_json::from_value(v).expect("payload shape")))
}

/// Run the JSON extractor over a raw body, as the router does.
async fn extract(body: &str) -> Result<Json<ChartRequest>, JsonRejection> {
    let req = Request::builder()
        .method("POST")
        .uri("/grafico")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    Json::<ChartRequest>::from_request(req, &()).await
}

async fn error_body(err: ApiError) -> (StatusCode, serde_json::Value) {
    let resp = err.into_response();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).expect("json error body"))
}

#[tokio::test]
async fn health_says_ok() {
    assert_eq!(health().await, "ok");
}

#[tokio::test]
async fn render_returns_png() {
    let payload = request(json!({
        "insumos": [{"titulo": "A", "valor_verde": 100, "valor_amarelo": 50}],
        "personalizacao": {"largura": 600, "altura": 300}
    }));
    let resp = match render_png(payload).await {
        Ok(r) => r,
        Err(e) => panic!("render failed: {e}"),
    };
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/png");

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let img = image::load_from_memory(&body).expect("png body").to_rgba8();
    assert_eq!(img.dimensions(), (600, 300));
}

#[tokio::test]
async fn validation_errors_are_bad_requests() {
    let payloads = [
        json!({"settings": {"color_primary": "#12345"}}),
        json!({"settings": {"width": 0}}),
        json!({"settings": {"background": "%%%"}}),
        json!({"items": [{"value_primary": 1}]}),
    ];
    for p in payloads {
        let err = match render_png(request(p.clone())).await {
            Ok(_) => panic!("expected failure for {p}"),
            Err(e) => e,
        };
        assert_eq!(err.as_status_code(), StatusCode::BAD_REQUEST, "{p}");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn numeric_settings_in_other_json_types_render() {
    let payload = extract(r#"{"insumos":[{"titulo":"A","valor_verde":5}],"personalizacao":{"largura":300.0,"altura":"200"}}"#).await;
    let resp = match render_png(payload).await {
        Ok(r) => r,
        Err(e) => panic!("render failed: {e}"),
    };
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let img = image::load_from_memory(&body).expect("png body").to_rgba8();
    assert_eq!(img.dimensions(), (300, 200));
}

#[tokio::test]
async fn unreadable_payloads_are_json_bad_requests() {
    let bodies = [
        "{not json",
        r#"{"insumos": "nope"}"#,
        r#"{"personalizacao": {"legenda": "sim"}}"#,
    ];
    for body in bodies {
        let err = match render_png(extract(body).await).await {
            Ok(_) => panic!("expected failure for {body}"),
            Err(e) => e,
        };
        let (status, json) = error_body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(json["error_message"].as_str().is_some_and(|m| !m.is_empty()), "{body}");
    }
}

#[tokio::test]
async fn bad_integer_setting_is_a_json_bad_request() {
    let err = match render_png(extract(r#"{"personalizacao": {"largura": "wide"}}"#).await).await {
        Ok(_) => panic!("expected failure"),
        Err(e) => e,
    };
    let (status, json) = error_body(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error_message"].as_str().unwrap().contains("width"));
}

#[test]
fn internal_failures_are_server_errors() {
    let err = ApiError::from(ChartError::render("surface"));
    assert_eq!(err.as_status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn config_defaults() {
    let cfg = ServerConfig::try_parse_from(["budget-chart-server"]).unwrap();
    assert_eq!(cfg.addr.port(), 8000);
    assert_eq!(cfg.body_limit, 32 * 1024 * 1024);

    let cfg = ServerConfig::try_parse_from(["budget-chart-server", "--addr", "127.0.0.1:9001"]).unwrap();
    assert_eq!(cfg.addr.to_string(), "127.0.0.1:9001");
}
