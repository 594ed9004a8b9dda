//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the ordered route table
//! - Find the first route matching (method, path)
//! - Decode parameters and invoke the bound handler
//! - Answer with the fixed not-found response when nothing matches
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in declared order; earlier routes shadow later ones
//! - No fallthrough once a route matched, even if decoding fails
//! - Handler failures are not translated here

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;

use crate::http::response;
use crate::routing::route::Route;

/// Ordered, immutable route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build the table. Routes are kept in the given order and never merged,
    /// so a route that is fully shadowed by an earlier one is unreachable.
    pub fn register(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route accepting `method` and `path`, with its captures.
    pub fn find<'p>(&self, method: &Method, path: &'p str) -> Option<(&Route, Vec<&'p str>)> {
        self.routes
            .iter()
            .find_map(|route| route.matches(method, path).map(|captures| (route, captures)))
    }

    /// Dispatch a request to the first matching route.
    pub fn dispatch(&self, method: &Method, path: &str, request: &Request<Body>) -> Response {
        let Some((route, captures)) = self.find(method, path) else {
            tracing::warn!(method = %method, path = %path, "No route matched");
            return response::not_found();
        };

        tracing::debug!(
            method = %method,
            path = %path,
            pattern = route.pattern(),
            "Route matched"
        );

        match (route.decoder())(&captures) {
            Ok(param) => (route.handler())(request, param),
            Err(e) => {
                tracing::warn!(method = %method, path = %path, error = %e, "Failed to decode path parameters");
                response::bad_request()
            }
        }
    }
}
