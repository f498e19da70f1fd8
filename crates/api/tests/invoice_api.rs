//! HTTP-level integration tests for the invoice dashboard endpoints.
//!
//! Covers the form write path (create, update, delete with redirect),
//! validation failures, listing pagination and search, and the listing
//! version signal.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, create_test_user, get_auth, login_token, post_form_auth};
use finboard_db::repositories::InvoiceRepo;
use sqlx::PgPool;

/// Seeded customer ids (insertion order in the seed migration).
const EVIL_RABBIT: &str = "1";
const AMY_BURNS: &str = "5";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the app and an authenticated session token.
async fn app_with_session(pool: PgPool) -> (Router, String) {
    let (_user, password) = create_test_user(&pool, "clerk@test.com").await;
    let app = common::build_test_app(pool);
    let token = login_token(app.clone(), "clerk@test.com", &password).await;
    (app, token)
}

/// Create one invoice through the API, asserting the redirect.
async fn create_invoice(app: Router, token: &str, customer_id: &str, amount: &str, status: &str) {
    let response = post_form_auth(
        app,
        "/dashboard/invoices",
        token,
        &[
            ("customer_id", customer_id),
            ("amount", amount),
            ("status", status),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// A valid form submission stores exactly one row with the amount in cents
/// and redirects to the listing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_stores_cents_and_redirects(pool: PgPool) {
    let (app, token) = app_with_session(pool.clone()).await;

    let response = post_form_auth(
        app,
        "/dashboard/invoices",
        &token,
        &[
            ("customer_id", EVIL_RABBIT),
            ("amount", "25.50"),
            ("status", "paid"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/dashboard/invoices"
    );

    let count = InvoiceRepo::count_filtered(&pool, "").await.unwrap();
    assert_eq!(count, 1, "exactly one row must be stored");

    let rows = InvoiceRepo::list_filtered(&pool, "", 10, 0).await.unwrap();
    assert_eq!(rows[0].amount_cents, 2550);
    assert_eq!(rows[0].status, "paid");
    assert_eq!(rows[0].customer_name, "Evil Rabbit");
}

/// A zero amount is rejected with the field-level "greater than $0"
/// message and no write happens.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_zero_amount(pool: PgPool) {
    let (app, token) = app_with_session(pool.clone()).await;

    let response = post_form_auth(
        app,
        "/dashboard/invoices",
        &token,
        &[
            ("customer_id", EVIL_RABBIT),
            ("amount", "0"),
            ("status", "paid"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;

    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing fields. Failed to create invoice.");
    let amount_errors = json["errors"]["amount"].as_array().unwrap();
    assert!(
        amount_errors[0]
            .as_str()
            .unwrap()
            .contains("greater than $0"),
        "amount error must mention the positivity requirement"
    );

    let count = InvoiceRepo::count_filtered(&pool, "").await.unwrap();
    assert_eq!(count, 0, "a rejected submission must not write");
}

/// An empty submission reports every field at once.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_empty_form_per_field(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    let response = post_form_auth(app, "/dashboard/invoices", &token, &[]).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;

    assert!(json["errors"]["customer_id"].is_array());
    assert!(json["errors"]["amount"].is_array());
    assert!(json["errors"]["status"].is_array());
}

/// A status outside the closed enumeration is a field error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_unknown_status(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    let response = post_form_auth(
        app,
        "/dashboard/invoices",
        &token,
        &[
            ("customer_id", EVIL_RABBIT),
            ("amount", "10"),
            ("status", "overdue"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["errors"]["status"][0],
        "Please select an invoice status."
    );
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Seven invoices split into two pages of six-per-page, newest first.
#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_paginates_at_six_per_page(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    for i in 1..=7 {
        create_invoice(app.clone(), &token, EVIL_RABBIT, &i.to_string(), "pending").await;
    }

    let response = get_auth(app.clone(), "/dashboard/invoices", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["total_pages"], 2);
    assert_eq!(data["current_page"], 1);
    assert_eq!(data["invoices"].as_array().unwrap().len(), 6);
    assert_eq!(data["pagination"], serde_json::json!([1, 2]));

    let response = get_auth(app, "/dashboard/invoices?page=2", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["current_page"], 2);
    assert_eq!(json["data"]["invoices"].as_array().unwrap().len(), 1);
}

/// The search text filters on the joined customer fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_filters_by_customer(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    create_invoice(app.clone(), &token, EVIL_RABBIT, "10", "pending").await;
    create_invoice(app.clone(), &token, AMY_BURNS, "20", "paid").await;

    let response = get_auth(app, "/dashboard/invoices?query=rabbit", &token).await;
    let json = body_json(response).await;

    let invoices = json["data"]["invoices"].as_array().unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0]["customer_name"], "Evil Rabbit");
}

/// The search text also matches the invoice status.
#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_filters_by_status_text(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    create_invoice(app.clone(), &token, EVIL_RABBIT, "10", "pending").await;
    create_invoice(app.clone(), &token, AMY_BURNS, "20", "paid").await;

    let response = get_auth(app, "/dashboard/invoices?query=paid", &token).await;
    let json = body_json(response).await;

    let invoices = json["data"]["invoices"].as_array().unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0]["status"], "paid");
}

/// A garbage page parameter falls back to page 1 instead of failing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_defaults_garbage_page_to_one(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    create_invoice(app.clone(), &token, EVIL_RABBIT, "10", "pending").await;

    let response = get_auth(app, "/dashboard/invoices?page=abc", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["current_page"], 1);
}

/// An out-of-range page clamps to the last page.
#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_clamps_page_beyond_range(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    create_invoice(app.clone(), &token, EVIL_RABBIT, "10", "pending").await;

    let response = get_auth(app, "/dashboard/invoices?page=99", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["current_page"], 1);
    assert_eq!(json["data"]["invoices"].as_array().unwrap().len(), 1);
}

/// Each successful write bumps the listing version.
#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_version_changes_after_write(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    let response = get_auth(app.clone(), "/dashboard/invoices", &token).await;
    let before = body_json(response).await["data"]["listing_version"]
        .as_u64()
        .unwrap();

    create_invoice(app.clone(), &token, EVIL_RABBIT, "10", "pending").await;

    let response = get_auth(app, "/dashboard/invoices", &token).await;
    let after = body_json(response).await["data"]["listing_version"]
        .as_u64()
        .unwrap();

    assert!(after > before, "a write must mark the listing stale");
}

// ---------------------------------------------------------------------------
// Edit view / update
// ---------------------------------------------------------------------------

/// The edit view converts stored cents back to dollars and includes the
/// customer dropdown entries.
#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_view_presents_dollars(pool: PgPool) {
    let (app, token) = app_with_session(pool.clone()).await;

    create_invoice(app.clone(), &token, EVIL_RABBIT, "25.50", "paid").await;
    let id = InvoiceRepo::list_filtered(&pool, "", 1, 0).await.unwrap()[0].id;

    let response = get_auth(app, &format!("/dashboard/invoices/{id}/edit"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["invoice"]["amount"], 25.5);
    assert_eq!(json["data"]["invoice"]["status"], "paid");
    assert_eq!(json["data"]["customers"].as_array().unwrap().len(), 6);
}

/// Updating replaces the form fields and redirects.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_fields(pool: PgPool) {
    let (app, token) = app_with_session(pool.clone()).await;

    create_invoice(app.clone(), &token, EVIL_RABBIT, "10", "pending").await;
    let id = InvoiceRepo::list_filtered(&pool, "", 1, 0).await.unwrap()[0].id;

    let response = post_form_auth(
        app,
        &format!("/dashboard/invoices/{id}"),
        &token,
        &[
            ("customer_id", AMY_BURNS),
            ("amount", "99.99"),
            ("status", "paid"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let invoice = InvoiceRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(invoice.amount_cents, 9999);
    assert_eq!(invoice.status, "paid");
    assert_eq!(invoice.customer_id, 5);
}

/// Updating a vanished id is a 404, not a fault.
#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_invoice_is_404(pool: PgPool) {
    let (app, token) = app_with_session(pool).await;

    let response = post_form_auth(
        app,
        "/dashboard/invoices/999999",
        &token,
        &[
            ("customer_id", EVIL_RABBIT),
            ("amount", "10"),
            ("status", "paid"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Delete removes the row and redirects; repeating the delete reports 404
/// without any unhandled fault.
#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_is_idempotent_at_the_api(pool: PgPool) {
    let (app, token) = app_with_session(pool.clone()).await;

    create_invoice(app.clone(), &token, EVIL_RABBIT, "10", "pending").await;
    let id = InvoiceRepo::list_filtered(&pool, "", 1, 0).await.unwrap()[0].id;

    let uri = format!("/dashboard/invoices/{id}/delete");

    let response = post_form_auth(app.clone(), &uri, &token, &[]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(InvoiceRepo::find_by_id(&pool, id).await.unwrap().is_none());

    // Second delete of the same id: reported, never a crash.
    let response = post_form_auth(app, &uri, &token, &[]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
