//! Request and response models for the generate endpoint.

pub mod generation;

pub use generation::{GenerateBody, GenerateResponse, GenerationRequest, HealthStatus};
