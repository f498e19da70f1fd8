//! Invoice model and DTOs.

use chrono::NaiveDate;
use finboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `invoices` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Invoice {
    pub id: DbId,
    pub customer_id: DbId,
    pub amount_cents: i64,
    pub status: String,
    pub date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new invoice.
#[derive(Debug)]
pub struct CreateInvoice {
    pub customer_id: DbId,
    pub amount_cents: i64,
    pub status: String,
    pub date: NaiveDate,
}

/// DTO for updating an invoice. The form resubmits every field, so this is
/// a full replace; the stored `date` is preserved.
#[derive(Debug)]
pub struct UpdateInvoice {
    pub customer_id: DbId,
    pub amount_cents: i64,
    pub status: String,
}

/// Invoice row joined with customer display fields for the listing table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InvoiceWithCustomer {
    pub id: DbId,
    pub customer_id: DbId,
    pub amount_cents: i64,
    pub status: String,
    pub date: NaiveDate,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_image_url: String,
}

/// Newest-invoice row for the overview widget.
#[derive(Debug, Clone, FromRow)]
pub struct LatestInvoice {
    pub id: DbId,
    pub amount_cents: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_image_url: String,
}
