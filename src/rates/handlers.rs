//! Rate handlers.
//!
//! Rate storage and conversion are not implemented; each handler logs the
//! decoded parameters and answers with its own name.

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};

use crate::http::request::request_id;
use crate::routing::RequestParam;

pub fn get_rate(req: &Request<Body>, param: RequestParam) -> Response {
    log_param(req, "getRate", &param);
    "getRate".into_response()
}

pub fn put_rate(req: &Request<Body>, param: RequestParam) -> Response {
    log_param(req, "putRate", &param);
    "putRate".into_response()
}

pub fn get_conversion(req: &Request<Body>, param: RequestParam) -> Response {
    log_param(req, "getConversion", &param);
    "getConversion".into_response()
}

fn log_param(req: &Request<Body>, handler: &str, param: &RequestParam) {
    tracing::info!(
        request_id = %request_id(req),
        handler,
        from_currency = %param.from_currency,
        to_currency = %param.to_currency,
        value = param.value,
        "Handling rate request"
    );
}
