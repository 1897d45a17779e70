//! Wire types for the generate endpoint and the defaulting step that turns a
//! raw body into a fully populated request.

use crate::config::RequestDefaults;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Body as sent by the caller. Every field is optional on the wire.
///
/// `prompt` distinguishes "absent" (`None`) from an explicit `null`
/// (`Some(None)`): only the former receives the fallback system prompt.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateBody {
    #[serde(default, deserialize_with = "present")]
    pub prompt: Option<Option<String>>,

    #[serde(default)]
    pub model: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// A request after defaults have been applied; validated before use.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct GenerationRequest {
    #[validate(length(min = 1, message = "Prompt is required"))]
    pub prompt: String,

    pub model: String,
}

impl GenerateBody {
    /// Apply defaults. Runs before validation, so an explicit empty prompt
    /// survives this step and is rejected afterwards.
    pub fn resolve(self, defaults: &RequestDefaults) -> GenerationRequest {
        let prompt = match self.prompt {
            None => defaults.system_prompt.clone(),
            Some(value) => value.unwrap_or_default(),
        };

        GenerationRequest {
            prompt,
            model: self.model.unwrap_or_else(|| defaults.model.clone()),
        }
    }
}

/// Successful generate response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub success: bool,
    pub text: String,
    pub model: String,
}

impl GenerateResponse {
    pub fn new(text: String, model: String) -> Self {
        Self {
            success: true,
            text,
            model,
        }
    }
}

/// Body of `GET /generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub api_key_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateBody {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn absent_prompt_gets_system_prompt() {
        let request = parse("{}").resolve(&RequestDefaults::default());
        assert_eq!(request.prompt, "you are a good researcher");
        assert_eq!(request.model, "gemini-1.5-flash");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn explicit_empty_prompt_is_kept_then_rejected() {
        let request = parse(r#"{"prompt": ""}"#).resolve(&RequestDefaults::default());
        assert_eq!(request.prompt, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn null_prompt_is_treated_as_empty() {
        let request = parse(r#"{"prompt": null}"#).resolve(&RequestDefaults::default());
        assert!(request.validate().is_err());
    }

    #[test]
    fn whitespace_prompt_passes_validation() {
        let request = parse(r#"{"prompt": "  "}"#).resolve(&RequestDefaults::default());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn null_model_falls_back_to_default() {
        let request = parse(r#"{"prompt": "hi", "model": null}"#).resolve(&RequestDefaults::default());
        assert_eq!(request.model, "gemini-1.5-flash");
    }

    #[test]
    fn explicit_model_is_kept() {
        let request =
            parse(r#"{"prompt": "hi", "model": "gemini-1.5-pro"}"#).resolve(&RequestDefaults::default());
        assert_eq!(request.model, "gemini-1.5-pro");
        assert_eq!(request.prompt, "hi");
    }

    #[test]
    fn non_string_prompt_does_not_parse() {
        assert!(serde_json::from_str::<GenerateBody>(r#"{"prompt": 42}"#).is_err());
        assert!(serde_json::from_str::<GenerateBody>(r#"{"model": true}"#).is_err());
    }

    #[test]
    fn health_status_uses_camel_case() {
        let body = serde_json::to_value(HealthStatus {
            status: "ok".into(),
            message: "m".into(),
            api_key_configured: false,
        })
        .unwrap();
        assert_eq!(body["apiKeyConfigured"], false);
    }
}
