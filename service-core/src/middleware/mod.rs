pub mod tracing;

pub use self::tracing::{
    HttpTraceLayer, REQUEST_ID_HEADER, RequestIdMakeSpan, http_trace_layer, request_id_middleware,
};
