//! A single entry of the route table.
//!
//! # Responsibilities
//! - Hold the method, compiled path pattern, decoder and handler
//! - Match a (method, path) pair and return the ordered captures
//!
//! # Design Decisions
//! - Patterns are compiled once in `Route::new`; a bad pattern fails startup
//! - Patterns are expected to be anchored (`^...$`) so a match is a full match
//! - Method mismatch short-circuits before any pattern evaluation

use std::fmt;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use regex::Regex;

use crate::routing::params::{ParamError, RequestParam};

/// Turns the ordered captures (whole match excluded) into typed parameters.
pub type ParamDecoder = fn(&[&str]) -> Result<RequestParam, ParamError>;

/// Produces the response for a matched request.
pub type Handler = fn(&Request<Body>, RequestParam) -> Response;

/// Error building a route.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("invalid path pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Static binding of (method, path pattern) to a decoder and a handler.
#[derive(Clone)]
pub struct Route {
    method: Method,
    pattern: Regex,
    decoder: ParamDecoder,
    handler: Handler,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl Route {
    /// Compile `pattern` and bind it to `method`, `decoder` and `handler`.
    pub fn new(
        method: Method,
        pattern: &str,
        decoder: ParamDecoder,
        handler: Handler,
    ) -> Result<Self, RouteError> {
        let pattern = Regex::new(pattern).map_err(|source| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            method,
            pattern,
            decoder,
            handler,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn decoder(&self) -> ParamDecoder {
        self.decoder
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }

    /// Returns the captured substrings in declaration order when both the
    /// method and the path match. Groups that did not take part yield "".
    pub fn matches<'p>(&self, method: &Method, path: &'p str) -> Option<Vec<&'p str>> {
        if self.method != *method {
            return None;
        }

        let captures = self.pattern.captures(path)?;
        Some(
            captures
                .iter()
                .skip(1)
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect(),
        )
    }
}
