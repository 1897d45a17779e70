use crate::models::HealthStatus;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `GET /generate`. Reports only whether a credential is present; the
/// credential itself is never checked against Gemini.
pub async fn generate_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        message: "Gemini API endpoint is running".to_string(),
        api_key_configured: state.config.gemini.api_key_configured(),
    })
}

/// Liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "genai-proxy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
