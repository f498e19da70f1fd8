//! Route definitions for the customers table.
//!
//! Mounted at `/dashboard/customers` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Customer routes.
///
/// ```text
/// GET /   -> list_customers (?query)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(customers::list_customers))
}
