//! Repository for the `customers` table (read-only reference data).

use finboard_core::invoice::{STATUS_PAID, STATUS_PENDING};
use sqlx::PgPool;

use crate::models::customer::{CustomerName, CustomerWithTotals};

/// Provides read operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// All customers as id + name pairs, ordered by name, for the invoice
    /// form's customer dropdown.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<CustomerName>, sqlx::Error> {
        sqlx::query_as::<_, CustomerName>(
            "SELECT id, name FROM customers ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Customers matching the search text on name or email, each with their
    /// invoice count and pending/paid totals.
    ///
    /// `SUM` over bigint yields numeric, hence the casts back to bigint.
    pub async fn list_filtered(
        pool: &PgPool,
        search: &str,
    ) -> Result<Vec<CustomerWithTotals>, sqlx::Error> {
        let pattern = format!("%{search}%");
        sqlx::query_as::<_, CustomerWithTotals>(
            "SELECT customers.id, customers.name, customers.email, customers.image_url,
                    COUNT(invoices.id) AS total_invoices,
                    COALESCE(SUM(invoices.amount_cents)
                        FILTER (WHERE invoices.status = $2), 0)::bigint
                        AS total_pending_cents,
                    COALESCE(SUM(invoices.amount_cents)
                        FILTER (WHERE invoices.status = $3), 0)::bigint
                        AS total_paid_cents
             FROM customers
             LEFT JOIN invoices ON invoices.customer_id = customers.id
             WHERE customers.name ILIKE $1 OR customers.email ILIKE $1
             GROUP BY customers.id, customers.name, customers.email, customers.image_url
             ORDER BY customers.name ASC",
        )
        .bind(&pattern)
        .bind(STATUS_PENDING)
        .bind(STATUS_PAID)
        .fetch_all(pool)
        .await
    }
}
