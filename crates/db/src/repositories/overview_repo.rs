//! Aggregate queries backing the overview cards.

use finboard_core::invoice::{STATUS_PAID, STATUS_PENDING};
use sqlx::PgPool;

use crate::models::overview::CardData;

/// Provides the overview card aggregates.
pub struct OverviewRepo;

impl OverviewRepo {
    /// Invoice count, customer count, and paid/pending totals in a single
    /// round trip.
    pub async fn card_data(pool: &PgPool) -> Result<CardData, sqlx::Error> {
        sqlx::query_as::<_, CardData>(
            "SELECT (SELECT COUNT(*) FROM invoices) AS invoice_count,
                    (SELECT COUNT(*) FROM customers) AS customer_count,
                    COALESCE(SUM(amount_cents) FILTER (WHERE status = $1), 0)::bigint
                        AS total_paid_cents,
                    COALESCE(SUM(amount_cents) FILTER (WHERE status = $2), 0)::bigint
                        AS total_pending_cents
             FROM invoices",
        )
        .bind(STATUS_PAID)
        .bind(STATUS_PENDING)
        .fetch_one(pool)
        .await
    }
}
