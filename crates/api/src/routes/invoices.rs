//! Route definitions for the invoice dashboard.
//!
//! Mounted at `/dashboard/invoices` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::invoices;
use crate::state::AppState;

/// Invoice routes.
///
/// ```text
/// GET  /              -> list_invoices (?query, page)
/// POST /              -> create_invoice (form body)
/// POST /{id}          -> update_invoice (form body)
/// GET  /{id}/edit     -> edit_invoice_view
/// POST /{id}/delete   -> delete_invoice
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route("/{id}", post(invoices::update_invoice))
        .route("/{id}/edit", get(invoices::edit_invoice_view))
        .route("/{id}/delete", post(invoices::delete_invoice))
}
