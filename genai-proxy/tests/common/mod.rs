#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use genai_proxy::config::{GeminiSettings, GenaiProxyConfig, RequestDefaults};
use genai_proxy::services::providers::TextProvider;
use genai_proxy::startup::{build_router, AppState};
use http_body_util::BodyExt;
use service_core::config::Config;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_config(api_key: Option<&str>) -> GenaiProxyConfig {
    GenaiProxyConfig {
        common: Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        gemini: GeminiSettings::new(api_key.map(String::from)),
        defaults: RequestDefaults::default(),
    }
}

pub fn test_app(api_key: Option<&str>, provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState {
        config: test_config(api_key),
        text_provider: provider,
    })
}

pub fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
