//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are driven through `tower::ServiceExt::oneshot` directly
//! against the router, so no TCP listener is involved. `build_test_app`
//! mirrors the production router construction (same middleware stack).

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use finboard_api::auth::password::hash_password;
use finboard_api::auth::provider::PgSessionAuth;
use finboard_api::config::ServerConfig;
use finboard_api::router::build_app_router;
use finboard_api::state::AppState;
use finboard_db::models::user::{CreateUser, User};
use finboard_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session_expiry_days: 7,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Clone the returned router to issue several requests against the same
/// shared state (the clones share the pool and listing version).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let auth = Arc::new(PgSessionAuth::new(pool.clone(), config.session_expiry_days));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        auth,
        listing_version: Arc::new(AtomicU64::new(0)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Encode form fields as `application/x-www-form-urlencoded`.
///
/// Values must not contain characters that need escaping; test data keeps
/// to emails, numbers, and status words.
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer session token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a form-encoded body.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a form-encoded body and a Bearer session token.
pub async fn post_form_auth(
    app: Router,
    uri: &str,
    token: &str,
    fields: &[(&str, &str)],
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(encode_form(fields)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user directly in the database. Returns the row plus the
/// plaintext password used.
pub async fn create_test_user(pool: &PgPool, email: &str) -> (User, String) {
    let password = "test_password_123";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: hashed,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in via the API and return the session token.
pub async fn login_token(app: Router, email: &str, password: &str) -> String {
    let response = post_form(
        app,
        "/auth/login",
        &[("email", email), ("password", password)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["session_token"]
        .as_str()
        .expect("login must return a session token")
        .to_string()
}
