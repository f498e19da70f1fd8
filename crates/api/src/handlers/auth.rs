//! Handlers for login and logout.
//!
//! Login accepts a form-encoded body (the login page posts a plain form)
//! and returns the session token. Bad credentials always surface as the
//! fixed "Invalid credentials." message; anything unexpected from the
//! provider re-raises to the error boundary.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use finboard_core::types::{DbId, Timestamp};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub expires_at: Timestamp,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/login
///
/// Authenticate with email + password and establish a session.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .auth
        .verify_credentials(&input.email, &input.password)
        .await?;

    let session = state.auth.create_session(user.user_id).await?;

    tracing::info!(user_id = user.user_id, "User logged in");

    Ok(Json(LoginResponse {
        session_token: session.token,
        expires_at: session.expires_at,
        user: UserInfo {
            id: user.user_id,
            name: user.name,
            email: user.email,
        },
    }))
}

/// POST /auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    state.auth.destroy_sessions(auth_user.user_id).await?;

    tracing::info!(user_id = auth_user.user_id, "User logged out");

    Ok(StatusCode::NO_CONTENT)
}
