//! Request identification and tracing.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) unless the client sent one
//! - Echo the ID back in the response
//! - Open a tracing span per request carrying method, path and ID
//!
//! # Design Decisions
//! - Request ID added as early as possible so every log line can carry it

use axum::body::Body;
use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{HttpMakeClassifier, TraceLayer};
use tracing::Span;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer assigning `x-request-id` to incoming requests.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Layer copying `x-request-id` onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

/// Read the request ID assigned by [`set_request_id_layer`].
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
    )
}

/// HTTP trace layer whose spans carry the request ID.
pub fn trace_layer() -> TraceLayer<HttpMakeClassifier, fn(&Request<Body>) -> Span> {
    TraceLayer::new_for_http().make_span_with(make_span as fn(&Request<Body>) -> Span)
}
