//! Handlers for the invoice dashboard resource.
//!
//! Reads return JSON view models; form posts perform exactly one write,
//! bump the listing version, and redirect back to the listing route.

use axum::extract::{Form, Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};

use finboard_core::error::CoreError;
use finboard_core::invoice::validate_invoice_form;
use finboard_core::money::cents_to_dollars;
use finboard_core::pagination::{
    clamp_page, generate_pagination, page_offset, parse_page, total_pages, PageToken,
    ITEMS_PER_PAGE,
};
use finboard_core::types::DbId;
use finboard_db::models::customer::CustomerName;
use finboard_db::models::invoice::{CreateInvoice, InvoiceWithCustomer, UpdateInvoice};
use finboard_db::repositories::{CustomerRepo, InvoiceRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListingParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Listing route clients are redirected to after a successful write.
pub const INVOICES_ROUTE: &str = "/dashboard/invoices";

/// Summary messages for rejected form submissions.
const MSG_CREATE_FAILED: &str = "Missing fields. Failed to create invoice.";
const MSG_UPDATE_FAILED: &str = "Missing fields. Failed to update invoice.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Raw invoice form fields as submitted. Everything is optional text;
/// validation decides what is acceptable.
#[derive(Debug, Deserialize)]
pub struct InvoiceFormBody {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// One page of the invoice listing.
#[derive(Debug, Serialize)]
pub struct InvoiceListPage {
    pub invoices: Vec<InvoiceWithCustomer>,
    pub total_pages: u32,
    pub current_page: u32,
    /// Rendered pager window: page numbers and `"..."` markers.
    pub pagination: Vec<PageToken>,
    /// Changes after every successful write; a different value than last
    /// seen means this listing is stale.
    pub listing_version: u64,
}

/// Edit-form view model: the invoice with its amount converted back to
/// dollars for the form input, plus the customer dropdown entries.
#[derive(Debug, Serialize)]
pub struct InvoiceEditView {
    pub invoice: InvoiceFormData,
    pub customers: Vec<CustomerName>,
}

/// Invoice fields as the edit form presents them.
#[derive(Debug, Serialize)]
pub struct InvoiceFormData {
    pub id: DbId,
    pub customer_id: DbId,
    /// Dollars, e.g. `25.5` for a stored 2550 cents.
    pub amount: f64,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Read handlers
// ---------------------------------------------------------------------------

/// GET /dashboard/invoices?query=&page=
///
/// One filtered, paginated page of the invoice listing, with the rendered
/// pagination window. A missing or unparseable `page` falls back to 1; an
/// out-of-range page is clamped to the last page.
pub async fn list_invoices(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> AppResult<Json<DataResponse<InvoiceListPage>>> {
    let search = params.query.unwrap_or_default();

    let row_count = InvoiceRepo::count_filtered(&state.pool, &search).await?;
    let pages = total_pages(row_count, ITEMS_PER_PAGE);
    let page = clamp_page(parse_page(params.page.as_deref()), pages);

    let invoices = InvoiceRepo::list_filtered(
        &state.pool,
        &search,
        ITEMS_PER_PAGE,
        page_offset(page, ITEMS_PER_PAGE),
    )
    .await?;

    Ok(Json(DataResponse {
        data: InvoiceListPage {
            invoices,
            total_pages: pages,
            current_page: page,
            pagination: generate_pagination(page, pages),
            listing_version: state.listing_version(),
        },
    }))
}

/// GET /dashboard/invoices/{id}/edit
///
/// The edit-form view model for one invoice.
pub async fn edit_invoice_view(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<InvoiceEditView>>> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;

    let customers = CustomerRepo::list_names(&state.pool).await?;

    Ok(Json(DataResponse {
        data: InvoiceEditView {
            invoice: InvoiceFormData {
                id: invoice.id,
                customer_id: invoice.customer_id,
                amount: cents_to_dollars(invoice.amount_cents),
                status: invoice.status,
            },
            customers,
        },
    }))
}

// ---------------------------------------------------------------------------
// Write handlers
// ---------------------------------------------------------------------------

/// POST /dashboard/invoices
///
/// Create an invoice from a form submission. Validation failures return 422
/// with per-field messages and perform no write; success inserts exactly
/// one row, marks the listing stale, and redirects to the listing.
pub async fn create_invoice(
    auth: AuthUser,
    State(state): State<AppState>,
    Form(body): Form<InvoiceFormBody>,
) -> AppResult<Redirect> {
    let form = validate_invoice_form(
        body.customer_id.as_deref(),
        body.amount.as_deref(),
        body.status.as_deref(),
    )
    .map_err(|errors| AppError::validation(MSG_CREATE_FAILED, errors))?;

    let input = CreateInvoice {
        customer_id: form.customer_id,
        amount_cents: form.amount_cents,
        status: form.status,
        date: chrono::Utc::now().date_naive(),
    };
    let invoice = InvoiceRepo::create(&state.pool, &input).await?;
    let version = state.bump_listing_version();

    tracing::info!(
        user_id = auth.user_id,
        invoice_id = invoice.id,
        amount_cents = invoice.amount_cents,
        status = %invoice.status,
        listing_version = version,
        "Invoice created"
    );

    Ok(Redirect::to(INVOICES_ROUTE))
}

/// POST /dashboard/invoices/{id}
///
/// Update an invoice from a form submission. The stored date is preserved;
/// only the form fields are replaced.
pub async fn update_invoice(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(body): Form<InvoiceFormBody>,
) -> AppResult<Redirect> {
    let form = validate_invoice_form(
        body.customer_id.as_deref(),
        body.amount.as_deref(),
        body.status.as_deref(),
    )
    .map_err(|errors| AppError::validation(MSG_UPDATE_FAILED, errors))?;

    let input = UpdateInvoice {
        customer_id: form.customer_id,
        amount_cents: form.amount_cents,
        status: form.status,
    };
    let invoice = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    let version = state.bump_listing_version();

    tracing::info!(
        user_id = auth.user_id,
        invoice_id = invoice.id,
        amount_cents = invoice.amount_cents,
        status = %invoice.status,
        listing_version = version,
        "Invoice updated"
    );

    Ok(Redirect::to(INVOICES_ROUTE))
}

/// POST /dashboard/invoices/{id}/delete
///
/// Delete an invoice. Deleting an id that is already gone reports 404 and
/// leaves the listing version untouched; it never faults.
pub async fn delete_invoice(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = InvoiceRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }));
    }

    let version = state.bump_listing_version();

    tracing::info!(
        user_id = auth.user_id,
        invoice_id = id,
        listing_version = version,
        "Invoice deleted"
    );

    Ok(Redirect::to(INVOICES_ROUTE))
}
