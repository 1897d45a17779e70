//! Router-level tests for the generate endpoint, driven in-process with a
//! mock provider.

mod common;

use axum::http::StatusCode;
use common::{get, post, send, test_app};
use genai_proxy::services::providers::mock::{MockCall, MockTextProvider};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn explain_gravity_returns_text_and_default_model() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = test_app(Some("test-key"), provider.clone());

    let (status, body) = send(app, post("/generate", r#"{"prompt": "Explain gravity"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "text": "Mock response for: Explain gravity",
            "model": "gemini-1.5-flash"
        })
    );
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn text_is_relayed_verbatim_and_model_echoed() {
    let text = "  line one\n\n\tline two  ";
    let provider = Arc::new(MockTextProvider::replying(text));
    let app = test_app(Some("test-key"), provider.clone());

    let (status, body) = send(
        app,
        post("/generate", r#"{"prompt": "hi", "model": "gemini-1.5-pro"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], text);
    assert_eq!(body["model"], "gemini-1.5-pro");
    assert_eq!(
        provider.calls(),
        vec![MockCall {
            model: "gemini-1.5-pro".into(),
            prompt: "hi".into(),
        }]
    );
}

#[tokio::test]
async fn missing_prompt_uses_system_prompt() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = test_app(Some("test-key"), provider.clone());

    let (status, body) = send(app, post("/generate", "{}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Mock response for: you are a good researcher");
    assert_eq!(provider.calls()[0].prompt, "you are a good researcher");
}

#[tokio::test]
async fn empty_prompt_is_rejected() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = test_app(Some("test-key"), provider.clone());

    let (status, body) = send(app, post("/generate", r#"{"prompt": ""}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Prompt is required" }));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let provider = Arc::new(MockTextProvider::echo());
    let app = test_app(Some("test-key"), provider.clone());

    let (status, body) = send(app, post("/generate", "{prompt:")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid JSON body" }));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn missing_credential_fails_every_valid_post() {
    for raw in [r#"{"prompt": "Explain gravity"}"#, "{}", r#"{"model": "gemini-1.5-pro"}"#] {
        let provider = Arc::new(MockTextProvider::echo());
        let app = test_app(None, provider.clone());

        let (status, body) = send(app, post("/generate", raw)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body {raw}");
        assert_eq!(body, json!({ "error": "GEMINI_API_KEY is not configured" }));
        assert!(provider.calls().is_empty());
    }
}

#[tokio::test]
async fn upstream_failure_is_reported_with_details() {
    let provider = Arc::new(MockTextProvider::failing("models/nope is not found"));
    let app = test_app(Some("test-key"), provider);

    let (status, body) = send(app.clone(), post("/generate", r#"{"prompt": "x", "model": "nope"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "Failed to generate content",
            "details": "models/nope is not found"
        })
    );

    // The service keeps answering after an upstream failure.
    let (status, _) = send(app, get("/generate")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn legacy_path_behaves_like_generate() {
    let provider = Arc::new(MockTextProvider::replying("ok"));
    let app = test_app(Some("test-key"), provider);

    let (status, body) = send(app, post("/api/gemini", r#"{"prompt": "hello"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["text"], "ok");
}

#[tokio::test]
async fn hanging_upstream_never_answers() {
    let provider = Arc::new(MockTextProvider::hanging());
    let app = test_app(Some("test-key"), provider.clone());

    let outcome = tokio::time::timeout(
        Duration::from_millis(200),
        send(app, post("/generate", r#"{"prompt": "hello"}"#)),
    )
    .await;

    assert!(outcome.is_err(), "request should still be pending");
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = test_app(Some("test-key"), Arc::new(MockTextProvider::echo()));

    let (status, body) = send(app, get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}
