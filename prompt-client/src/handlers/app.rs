use crate::models::PromptForm;
use crate::AppState;
use askama::Template;
use axum::{extract::State, response::IntoResponse, Form};
use serde::Deserialize;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: PromptForm,
}

/// Fragment swapped into the page by htmx after a submission.
#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub form: PromptForm,
}

#[derive(Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: String,
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        form: PromptForm::new(state.model.clone()),
    }
}

/// Full-page form post, used when the browser runs without htmx.
pub async fn submit_page(
    State(state): State<AppState>,
    Form(payload): Form<PromptRequest>,
) -> impl IntoResponse {
    IndexTemplate {
        form: run_submission(&state, payload.prompt).await,
    }
}

/// htmx form post; returns only the result block.
pub async fn submit_fragment(
    State(state): State<AppState>,
    Form(payload): Form<PromptRequest>,
) -> impl IntoResponse {
    ResultTemplate {
        form: run_submission(&state, payload.prompt).await,
    }
}

async fn run_submission(state: &AppState, prompt: String) -> PromptForm {
    let mut form = PromptForm::new(state.model.clone()).with_prompt(prompt);
    form.submit(state.client.as_ref()).await;

    if let Some(error) = &form.error {
        tracing::warn!(error = %error, "Prompt submission failed");
    }

    form
}

pub async fn health_check() -> &'static str {
    "OK"
}
