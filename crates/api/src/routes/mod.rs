pub mod auth;
pub mod customers;
pub mod health;
pub mod invoices;
pub mod overview;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public, form body)
/// /auth/logout                         logout (requires session)
///
/// /dashboard/invoices                  list (?query, page), create (POST form)
/// /dashboard/invoices/{id}             update (POST form)
/// /dashboard/invoices/{id}/edit        edit-form view model
/// /dashboard/invoices/{id}/delete      delete (POST)
///
/// /dashboard/customers                 list (?query)
///
/// /dashboard/overview/cards            card widget
/// /dashboard/overview/revenue          revenue chart widget
/// /dashboard/overview/latest-invoices  latest invoices widget (?limit)
/// ```
///
/// All `/dashboard` routes require an authenticated session.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard/invoices", invoices::router())
        .nest("/dashboard/customers", customers::router())
        .nest("/dashboard/overview", overview::router())
}
