//! HTTP handlers for the proxy endpoint.

pub mod generate;
pub mod health;

pub use generate::{generate, process_generate};
pub use health::{generate_health, health_check};
