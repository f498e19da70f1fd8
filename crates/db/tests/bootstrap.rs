//! Bootstrap tests: migrations apply cleanly and seed the reference data.

use sqlx::PgPool;

/// Full bootstrap: connect, migrate, verify seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    finboard_db::health_check(&pool).await.unwrap();

    // Customers and revenue are seeded; invoices and users start empty.
    let (customers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(customers, 6, "customers should be seeded");

    let (revenues,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM revenues")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(revenues, 12, "one revenue row per month");

    let (invoices,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invoices")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(invoices, 0, "invoices are created through the application");

    let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0, "users are created through the application");
}

/// Seeded customer emails are unique and non-empty.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_customers_have_unique_emails(pool: PgPool) {
    let (distinct,): (i64,) = sqlx::query_as("SELECT COUNT(DISTINCT email) FROM customers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(distinct, 6);
}
