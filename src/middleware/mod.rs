// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Provides the CORS layer and per-request spans carrying a request id

/// Cross-origin resource sharing
pub mod cors;
/// Request span construction
pub mod request_tracing;

pub use cors::setup_cors;
pub use request_tracing::make_request_span;
