//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, tracing span)
//!     → routing::Router::dispatch (route table decides)
//!     → response.rs (fixed 404 / 400 bodies) or handler response
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
