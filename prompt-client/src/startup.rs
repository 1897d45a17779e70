use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{http_trace_layer, request_id_middleware};

use crate::handlers::{health_check, index, submit_fragment, submit_page};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit_page))
        .route("/prompt", post(submit_fragment))
        .route("/health", get(health_check))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
