//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router that hands every request to the dispatcher
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a listener until a shutdown signal arrives

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::request::{self, X_REQUEST_ID};
use crate::lifecycle::signals::shutdown_signal;
use crate::routing::Router as RouteTable;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server hosting the route table.
pub struct HttpServer {
    app: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `routes`.
    pub fn new(config: ServerConfig, routes: RouteTable) -> Self {
        let state = AppState {
            routes: Arc::new(routes),
        };

        let app = Self::build_app(&config, state);
        Self { app, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The assembled router, for serving in-process.
    pub fn app(&self) -> Router {
        self.app.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server until ctrl-c, SIGTERM or a message on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Every request lands here; the route table decides what happens next.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    state
        .routes
        .dispatch(request.method(), request.uri().path(), &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};
    use tower::ServiceExt;

    fn server() -> HttpServer {
        HttpServer::new(ServerConfig::default(), crate::rates::route_table().unwrap())
    }

    async fn send(method: Method, uri: &str) -> Response {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        server().app().oneshot(req).await.unwrap()
    }

    #[tokio::test]
    async fn test_query_string_ignored_for_matching() {
        let response = send(Method::GET, "/rate/usd/eur?verbose=1").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_config_kept() {
        let mut config = ServerConfig::default();
        config.timeouts.request_secs = 7;
        let server = HttpServer::new(config, RouteTable::default());
        assert_eq!(server.config().timeouts.request_secs, 7);
    }

    #[tokio::test]
    async fn test_request_id_assigned() {
        let response = send(Method::GET, "/nowhere").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_request_id_propagated() {
        let req = Request::builder()
            .uri("/rate/usd/eur")
            .header("x-request-id", "fixed-id")
            .body(Body::empty())
            .unwrap();
        let response = server().app().oneshot(req).await.unwrap();
        assert_eq!(response.headers().get("x-request-id").unwrap(), "fixed-id");
    }
}
