use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Prompt substituted when a request carries no `prompt` field at all.
pub const DEFAULT_SYSTEM_PROMPT: &str = "you are a good researcher";

/// Public Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Name of the credential variable, also used in the error shown to callers.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone)]
pub struct GenaiProxyConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub defaults: RequestDefaults,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// Absent when the deployment has no credential; checked per request.
    pub api_key: Option<Secret<String>>,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct RequestDefaults {
    pub model: String,
    pub system_prompt: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl GeminiSettings {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()).map(Secret::new),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }
}

impl GenaiProxyConfig {
    /// Load listener settings plus Gemini settings from the environment.
    ///
    /// A missing credential is not an error here; the service boots and
    /// reports it on each generate call instead.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(GenaiProxyConfig {
            common,
            gemini: GeminiSettings::new(env::var(API_KEY_ENV).ok())
                .with_api_base(get_env("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE)),
            defaults: RequestDefaults {
                model: get_env("GENAI_DEFAULT_MODEL", DEFAULT_MODEL),
                system_prompt: get_env("GENAI_SYSTEM_PROMPT", DEFAULT_SYSTEM_PROMPT),
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}
