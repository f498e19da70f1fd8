//! Repository for the `revenues` table (seeded monthly figures).

use sqlx::PgPool;

use crate::models::revenue::MonthlyRevenue;

/// Provides read access to monthly revenue figures.
pub struct RevenueRepo;

impl RevenueRepo {
    /// All monthly figures in calendar order (the seed inserts Jan..Dec).
    pub async fn list(pool: &PgPool) -> Result<Vec<MonthlyRevenue>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyRevenue>(
            "SELECT month, revenue_cents FROM revenues ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
