//! Request identification.
//!
//! # Responsibilities
//! - Name the request-id header used across the server
//! - Build the tracing span every request runs inside
//!
//! # Design Decisions
//! - Request ID is assigned before tracing so the span can carry it
//! - Missing IDs are logged as "unknown" rather than rejected

use axum::body::Body;
use axum::http::{HeaderName, Request};
use tracing::Span;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Read the request ID assigned by the request-id layer.
pub fn request_id(request: &Request<Body>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span wrapping the handling of one request.
pub fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request),
        method = %request.method(),
        path = %request.uri().path(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_from_header() {
        let req = Request::builder()
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&req), "abc-123");
    }

    #[test]
    fn test_request_id_missing() {
        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(request_id(&req), "unknown");
    }
}
