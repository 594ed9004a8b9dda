//! Currency rate HTTP dispatcher library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod rates;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RequestParam, Route, Router};
