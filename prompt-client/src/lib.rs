pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::GenerateClient;
use std::sync::Arc;

/// Shared application state: the proxy client and the model every prompt is
/// sent with.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GenerateClient>,
    pub model: String,
}

impl AppState {
    pub fn new(client: Arc<dyn GenerateClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}
