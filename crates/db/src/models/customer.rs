//! Customer model and read models.
//!
//! Customers are reference data seeded by migration; this service never
//! writes to the table.

use finboard_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Customer id + name pair for the invoice form's customer dropdown.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerName {
    pub id: DbId,
    pub name: String,
}

/// Customer row with invoice aggregates for the customers table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerWithTotals {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending_cents: i64,
    pub total_paid_cents: i64,
}
