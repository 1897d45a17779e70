use crate::config::ProxySettings;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when the proxy's reply carries no usable error text.
pub const FALLBACK_ERROR: &str = "Failed to generate content";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The proxy answered with an error body or a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to reach the generate endpoint: {0}")]
    Transport(String),

    #[error("{}", FALLBACK_ERROR)]
    InvalidResponse,
}

/// Anything that can turn a prompt into text. Implemented by [`ProxyClient`]
/// and by test fakes.
#[async_trait]
pub trait GenerateClient: Send + Sync {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ClientError>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct GenerateReply {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// HTTP client for the proxy's generate endpoint.
pub struct ProxyClient {
    client: Client,
    settings: ProxySettings,
}

impl ProxyClient {
    pub fn new(settings: ProxySettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn url(&self) -> &str {
        &self.settings.url
    }
}

#[async_trait]
impl GenerateClient for ProxyClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(&self.settings.url)
            .json(&GenerateRequest { prompt, model })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", self.settings.url, e);
                ClientError::Transport(e.to_string())
            })?;

        let status = response.status();
        let reply: GenerateReply = response.json().await.map_err(|e| {
            tracing::warn!(status = %status, "Undecodable reply from proxy: {}", e);
            ClientError::InvalidResponse
        })?;

        if !status.is_success() || reply.error.is_some() {
            let error = reply
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR.to_string());
            let message = match reply.details.filter(|d| !d.is_empty()) {
                Some(details) => format!("{}: {}", error, details),
                None => error,
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        reply.text.ok_or(ClientError::InvalidResponse)
    }
}
