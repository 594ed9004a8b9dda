//! The route table for the rate endpoints, in priority order.

use axum::http::Method;

use crate::rates::handlers::{get_conversion, get_rate, put_rate};
use crate::routing::params::{decode_currency_pair, decode_currency_pair_with_value};
use crate::routing::{Route, RouteError, Router};

// Whole path is case-insensitive, ASCII folding only.
const RATE: &str = r"(?i-u)^/rate/([a-z]{3})/([a-z]{3})$";
const RATE_WITH_VALUE: &str = r"(?i-u)^/rate/([a-z]{3})/([a-z]{3})/([0-9]*\.?[0-9]+)$";
const CONVERSION: &str = r"(?i-u)^/conversion/([a-z]{3})/([a-z]{3})/([0-9]*\.?[0-9]+)$";

/// Build the rate routes.
pub fn routes() -> Result<Vec<Route>, RouteError> {
    Ok(vec![
        Route::new(Method::GET, RATE, decode_currency_pair, get_rate)?,
        Route::new(Method::PUT, RATE_WITH_VALUE, decode_currency_pair_with_value, put_rate)?,
        Route::new(Method::GET, CONVERSION, decode_currency_pair_with_value, get_conversion)?,
    ])
}

/// Build the router serving the rate routes.
pub fn route_table() -> Result<Router, RouteError> {
    Ok(Router::register(routes()?))
}
