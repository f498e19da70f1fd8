//! Route definitions for the overview widgets.
//!
//! Mounted at `/dashboard/overview` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::overview;
use crate::state::AppState;

/// Overview widget routes.
///
/// ```text
/// GET /cards            -> cards
/// GET /revenue          -> revenue
/// GET /latest-invoices  -> latest_invoices (?limit)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cards", get(overview::cards))
        .route("/revenue", get(overview::revenue))
        .route("/latest-invoices", get(overview::latest_invoices))
}
