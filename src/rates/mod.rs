//! Currency rate endpoints.
//!
//! # Routes
//! ```text
//! GET /rate/{from}/{to}               → get_rate
//! PUT /rate/{from}/{to}/{value}       → put_rate
//! GET /conversion/{from}/{to}/{value} → get_conversion
//! ```
//!
//! Currency codes are three ASCII letters in either case and are passed on
//! unchanged. Values are unsigned decimals such as `5`, `5.5` or `.5`.

pub mod handlers;
pub mod routes;

pub use routes::route_table;
