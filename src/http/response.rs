//! Fixed responses produced by the dispatcher itself.
//!
//! # Responsibilities
//! - Build the JSON not-found response returned when no route matches
//! - Build the JSON bad-request response for undecodable parameters
//!
//! # Design Decisions
//! - Content type carries an explicit utf-8 charset
//! - Body is a single-field `{"message": ...}` object

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Body shape shared by the dispatcher's own responses.
#[derive(Debug, Serialize)]
pub struct MessageBody<'a> {
    pub message: &'a str,
}

/// 404 returned when no route matches.
pub fn not_found() -> Response {
    json_message(StatusCode::NOT_FOUND, "NOT FOUND")
}

/// 400 returned when a matched route's captures cannot be decoded.
pub fn bad_request() -> Response {
    json_message(StatusCode::BAD_REQUEST, "BAD REQUEST")
}

/// Serialize `{"message": message}` with the given status.
pub fn json_message(status: StatusCode, message: &str) -> Response {
    match serde_json::to_vec(&MessageBody { message }) {
        Ok(bytes) => {
            let mut response = Response::new(Body::from(bytes));
            *response.status_mut() = status;
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
            response
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_wire_format() {
        let response = not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"message":"NOT FOUND"}"#);
    }

    #[tokio::test]
    async fn test_bad_request_wire_format() {
        let response = bad_request();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_UTF8
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"message":"BAD REQUEST"}"#);
    }
}
