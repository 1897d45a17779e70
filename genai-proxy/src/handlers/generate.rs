use crate::config::API_KEY_ENV;
use crate::models::{GenerateBody, GenerateResponse};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

/// Message returned when the body is not a JSON object of the expected shape.
pub const INVALID_BODY_MESSAGE: &str = "Invalid JSON body";

/// `POST /generate`.
///
/// Takes raw bytes rather than `Json<_>` so an unparsable body maps to our own
/// 400 shape instead of axum's rejection. Each failure is logged once.
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    match process_generate(&state, &body).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            if err.status().is_client_error() {
                tracing::warn!(error = %err, "Rejected generate request");
            } else {
                tracing::error!(error = %err, "Gemini API error");
            }
            Err(err)
        }
    }
}

/// Parse, apply defaults, validate, check the credential, call upstream once.
pub async fn process_generate(
    state: &AppState,
    raw_body: &[u8],
) -> Result<GenerateResponse, AppError> {
    let request = parse_body(raw_body)?.resolve(&state.config.defaults);
    request.validate()?;

    if !state.config.gemini.api_key_configured() {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is not configured",
            API_KEY_ENV
        )));
    }

    let text = state
        .text_provider
        .generate(&request.model, &request.prompt)
        .await
        .map_err(|e| AppError::UpstreamError(e.to_string()))?;

    Ok(GenerateResponse::new(text, request.model))
}

fn parse_body(raw_body: &[u8]) -> Result<GenerateBody, AppError> {
    let malformed = || AppError::BadRequest(anyhow::anyhow!(INVALID_BODY_MESSAGE));

    let value: serde_json::Value = serde_json::from_slice(raw_body).map_err(|_| malformed())?;
    if !value.is_object() {
        return Err(malformed());
    }

    serde_json::from_value(value).map_err(|_| malformed())
}
