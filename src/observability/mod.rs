//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, handlers, http layers
//!     → tracing events and spans (request ID on every span)
//!     → logging.rs subscriber (stdout, pretty or JSON)
//! ```

pub mod logging;

pub use logging::init_logging;
