//! Text generation provider abstraction.
//!
//! The endpoint only ever sees `dyn TextProvider`, so tests can swap the
//! Gemini backend for [`mock::MockTextProvider`] without touching process
//! state.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
///
/// The endpoint reports every variant the same way; the split only matters
/// for logs.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("{0}")]
    ApiError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Content blocked: {0}")]
    ContentFiltered(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for single-shot text generation backends.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` to `model` and return the generated text verbatim.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;
}
