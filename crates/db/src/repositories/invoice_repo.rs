//! Repository for the `invoices` table.

use finboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::{
    CreateInvoice, Invoice, InvoiceWithCustomer, LatestInvoice, UpdateInvoice,
};

/// Column list for invoices queries.
const COLUMNS: &str = "id, customer_id, amount_cents, status, date, created_at, updated_at";

/// Listing filter: one pattern matched case-insensitively against the
/// joined customer fields and the invoice's own columns rendered as text.
const FILTER: &str = "customers.name ILIKE $1 \
     OR customers.email ILIKE $1 \
     OR invoices.amount_cents::text ILIKE $1 \
     OR invoices.date::text ILIKE $1 \
     OR invoices.status ILIKE $1";

/// Provides CRUD and listing operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (customer_id, amount_cents, status, date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(input.customer_id)
            .bind(input.amount_cents)
            .bind(&input.status)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace an invoice's form fields, returning the updated row.
    ///
    /// The stored `date` is left untouched. Returns `None` when the id no
    /// longer exists, so a racing delete surfaces as a not-found rather
    /// than an error.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices
             SET customer_id = $2, amount_cents = $3, status = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(input.customer_id)
            .bind(input.amount_cents)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an invoice by ID. Returns `true` if a row was deleted, so a
    /// repeated delete of the same id is a clean no-op for the caller.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One listing page of invoices joined with their customer, filtered by
    /// the user's search text, newest date first.
    pub async fn list_filtered(
        pool: &PgPool,
        search: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<InvoiceWithCustomer>, sqlx::Error> {
        let pattern = format!("%{search}%");
        let query = format!(
            "SELECT invoices.id, invoices.customer_id, invoices.amount_cents,
                    invoices.status, invoices.date,
                    customers.name AS customer_name,
                    customers.email AS customer_email,
                    customers.image_url AS customer_image_url
             FROM invoices
             JOIN customers ON customers.id = invoices.customer_id
             WHERE {FILTER}
             ORDER BY invoices.date DESC, invoices.id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, InvoiceWithCustomer>(&query)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Row count for the same filter as [`Self::list_filtered`], feeding the
    /// listing's total page count.
    pub async fn count_filtered(pool: &PgPool, search: &str) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{search}%");
        let query = format!(
            "SELECT COUNT(*)
             FROM invoices
             JOIN customers ON customers.id = invoices.customer_id
             WHERE {FILTER}"
        );
        let (count,): (i64,) = sqlx::query_as(&query).bind(&pattern).fetch_one(pool).await?;
        Ok(count)
    }

    /// The newest invoices with customer display fields for the overview.
    pub async fn latest(pool: &PgPool, limit: i64) -> Result<Vec<LatestInvoice>, sqlx::Error> {
        sqlx::query_as::<_, LatestInvoice>(
            "SELECT invoices.id, invoices.amount_cents,
                    customers.name AS customer_name,
                    customers.email AS customer_email,
                    customers.image_url AS customer_image_url
             FROM invoices
             JOIN customers ON customers.id = invoices.customer_id
             ORDER BY invoices.date DESC, invoices.id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
