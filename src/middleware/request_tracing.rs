// ABOUTME: Request tracing span construction for the HTTP layer
// ABOUTME: Tags every request span with method, path, and a propagated or generated request id

use axum::body::Body;
use http::Request;
use tracing::Span;
use uuid::Uuid;

/// Header carrying a caller-supplied correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory for `TraceLayer::make_span_with`
///
/// Reuses the caller's `x-request-id` when present so logs correlate across
/// services; otherwise a fresh id is generated.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned);

    tracing::info_span!(
        "http_request",
        http.method = %request.method(),
        http.path = %request.uri().path(),
        request_id = %request_id,
    )
}
