//! Monthly revenue read model backing the overview chart.

use serde::Serialize;
use sqlx::FromRow;

/// One month's revenue figure from the `revenues` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MonthlyRevenue {
    /// Short month label, e.g. `"Jan"`.
    pub month: String,
    pub revenue_cents: i64,
}
