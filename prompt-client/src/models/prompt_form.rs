//! State behind the prompt form.
//!
//! At most one of `response`/`error` is shown at a time, and a new
//! submission is refused while one is outstanding.

use crate::services::{ClientError, GenerateClient};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptForm {
    pub prompt: String,
    pub model: String,
    pub response: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
}

/// What gets sent for one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub prompt: String,
    pub model: String,
}

impl PromptForm {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The submit control is enabled only for a non-blank prompt with
    /// nothing pending.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.prompt.trim().is_empty()
    }

    /// Start a submission: clears the previous outcome and marks pending.
    /// Returns `None` (and changes nothing) when submitting is disabled.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }

        self.error = None;
        self.response = None;
        self.loading = true;

        Some(Submission {
            prompt: self.prompt.clone(),
            model: self.model.clone(),
        })
    }

    /// Record the outcome of the outstanding submission and clear pending.
    pub fn settle(&mut self, outcome: Result<String, ClientError>) {
        self.apply(outcome);
        self.loading = false;
    }

    fn apply(&mut self, outcome: Result<String, ClientError>) {
        match outcome {
            Ok(text) => {
                self.response = Some(text);
                self.error = None;
            }
            Err(err) => {
                self.response = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Submit through `client`. A no-op when [`Self::can_submit`] is false.
    ///
    /// Pending is cleared on every exit, including when this future is
    /// dropped before the reply arrives.
    pub async fn submit(&mut self, client: &dyn GenerateClient) {
        let Some(submission) = self.begin_submit() else {
            return;
        };

        let mut pending = PendingGuard { form: self };
        let outcome = client
            .generate(&submission.prompt, &submission.model)
            .await;
        pending.form.apply(outcome);
    }
}

struct PendingGuard<'a> {
    form: &'a mut PromptForm,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.form.loading = false;
    }
}
