#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use prompt_client::services::{ClientError, GenerateClient};
use prompt_client::startup::build_router;
use prompt_client::AppState;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_MODEL: &str = "gemini-1.5-flash";

/// Records every call and answers with a fixed outcome.
pub struct FakeClient {
    outcome: Result<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerateClient for FakeClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), model.to_string()));
        self.outcome.clone().map_err(|message| ClientError::Api {
            status: 500,
            message,
        })
    }
}

pub fn test_app(client: Arc<FakeClient>) -> Router {
    build_router(AppState::new(client, TEST_MODEL))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}
