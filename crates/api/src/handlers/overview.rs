//! Handlers for the dashboard overview widgets.
//!
//! Each widget is its own endpoint so slow sections resolve independently
//! of the rest of the page.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use finboard_core::money::format_currency;
use finboard_core::types::DbId;
use finboard_db::models::revenue::MonthlyRevenue;
use finboard_db::repositories::{InvoiceRepo, OverviewRepo, RevenueRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Counts and totals for the overview cards, totals pre-formatted.
#[derive(Debug, Serialize)]
pub struct CardsView {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// One entry of the latest-invoices widget.
#[derive(Debug, Serialize)]
pub struct LatestInvoiceItem {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: String,
}

/// Query params for `GET /dashboard/overview/latest-invoices`.
#[derive(Debug, Deserialize)]
pub struct LatestInvoicesParams {
    /// Max entries to return. Defaults to 5, capped at 20.
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /dashboard/overview/cards
///
/// Invoice count, customer count, and paid/pending totals.
pub async fn cards(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CardsView>>> {
    let data = OverviewRepo::card_data(&state.pool).await?;

    Ok(Json(DataResponse {
        data: CardsView {
            number_of_invoices: data.invoice_count,
            number_of_customers: data.customer_count,
            total_paid_invoices: format_currency(data.total_paid_cents),
            total_pending_invoices: format_currency(data.total_pending_cents),
        },
    }))
}

/// GET /dashboard/overview/revenue
///
/// The twelve monthly revenue figures backing the chart.
pub async fn revenue(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MonthlyRevenue>>>> {
    let months = RevenueRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: months }))
}

/// GET /dashboard/overview/latest-invoices?limit=
///
/// The newest invoices with customer display fields, amounts formatted.
pub async fn latest_invoices(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LatestInvoicesParams>,
) -> AppResult<Json<DataResponse<Vec<LatestInvoiceItem>>>> {
    let limit = params.limit.unwrap_or(5).clamp(1, 20);

    let invoices = InvoiceRepo::latest(&state.pool, limit).await?;

    let items = invoices
        .into_iter()
        .map(|inv| LatestInvoiceItem {
            id: inv.id,
            name: inv.customer_name,
            email: inv.customer_email,
            image_url: inv.customer_image_url,
            amount: format_currency(inv.amount_cents),
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}
