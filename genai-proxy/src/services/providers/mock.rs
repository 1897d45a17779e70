//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// What the mock does when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Reply with `Mock response for: <prompt>`.
    Echo,
    /// Reply with a fixed text.
    Reply(String),
    /// Fail with an API error carrying this message.
    Fail(String),
    /// Never resolve.
    Hang,
}

/// A recorded `(model, prompt)` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub model: String,
    pub prompt: String,
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<MockCall>>,
}

impl MockTextProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail(message.into()))
    }

    pub fn hanging() -> Self {
        Self::new(MockBehavior::Hang)
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(MockCall {
                model: model.to_string(),
                prompt: prompt.to_string(),
            });
        }

        match &self.behavior {
            MockBehavior::Echo => Ok(format!("Mock response for: {}", prompt)),
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
            MockBehavior::Hang => std::future::pending::<Result<String, ProviderError>>().await,
        }
    }
}
