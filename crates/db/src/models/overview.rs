//! Aggregate read model for the overview cards.

use sqlx::FromRow;

/// Counts and totals shown on the overview cards, fetched in one round trip.
#[derive(Debug, Clone, FromRow)]
pub struct CardData {
    pub invoice_count: i64,
    pub customer_count: i64,
    pub total_paid_cents: i64,
    pub total_pending_cents: i64,
}
