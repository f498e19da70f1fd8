//! Handlers for the customers table view.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use finboard_core::money::format_currency;
use finboard_core::types::DbId;
use finboard_db::repositories::CustomerRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// One row of the customers table, totals pre-formatted for display.
#[derive(Debug, Serialize)]
pub struct CustomerTableRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

/// GET /dashboard/customers?query=
///
/// Customers matching the search text, each with invoice count and
/// pending/paid totals.
pub async fn list_customers(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<CustomerTableRow>>>> {
    let search = params.query.unwrap_or_default();

    let customers = CustomerRepo::list_filtered(&state.pool, &search).await?;

    let rows = customers
        .into_iter()
        .map(|c| CustomerTableRow {
            id: c.id,
            name: c.name,
            email: c.email,
            image_url: c.image_url,
            total_invoices: c.total_invoices,
            total_pending: format_currency(c.total_pending_cents),
            total_paid: format_currency(c.total_paid_cents),
        })
        .collect();

    Ok(Json(DataResponse { data: rows }))
}
