//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered scan of the route table)
//!     → route.rs (method check, then pattern match)
//!     → params.rs (captures → RequestParam)
//!     → bound handler → Response
//!
//! No route matched:
//!     → fixed 404 JSON response
//! ```
//!
//! # Design Decisions
//! - Route table built once at startup, immutable at runtime
//! - First match wins, in declared order; no specificity ranking
//! - Method compared before the pattern is evaluated
//! - Decoders and handlers are plain function pointers

pub mod params;
pub mod route;
pub mod router;

pub use params::{ParamError, RequestParam};
pub use route::{Handler, ParamDecoder, Route, RouteError};
pub use router::Router;
