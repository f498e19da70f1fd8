//! The session-auth capability.
//!
//! Handlers depend on the [`SessionAuth`] trait rather than on concrete
//! credential checking, so tests can substitute a fake provider. The
//! production implementation is [`PgSessionAuth`]: Argon2id password
//! hashes, opaque tokens with SHA-256 digests at rest, sessions in the
//! `user_sessions` table.

use async_trait::async_trait;
use chrono::Utc;
use finboard_core::types::{DbId, Timestamp};
use finboard_db::models::session::CreateSession;
use finboard_db::repositories::{SessionRepo, UserRepo};
use finboard_db::DbPool;

use crate::auth::password::verify_password;
use crate::auth::token::{generate_session_token, hash_session_token};

/// Authentication failures, classified for user-facing handling.
///
/// `InvalidCredentials` renders as the fixed "Invalid credentials."
/// message; `Provider` is unexpected and re-raises to the error boundary.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NoSession,

    #[error("Auth provider error: {0}")]
    Provider(String),
}

/// Identity attached to an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: DbId,
    pub name: String,
    pub email: String,
}

/// A freshly established session.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Plaintext token, handed to the client exactly once.
    pub token: String,
    pub expires_at: Timestamp,
}

/// Capability for credential checking and session lifecycle.
#[async_trait]
pub trait SessionAuth: Send + Sync {
    /// Check submitted credentials, returning the matching user.
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError>;

    /// Establish a new session for a user.
    async fn create_session(&self, user_id: DbId) -> Result<IssuedSession, AuthError>;

    /// Resolve a bearer token into the authenticated user.
    async fn resolve_session(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;

    /// Revoke every active session for a user.
    async fn destroy_sessions(&self, user_id: DbId) -> Result<(), AuthError>;
}

/// Postgres-backed session-auth provider.
pub struct PgSessionAuth {
    pool: DbPool,
    session_expiry_days: i64,
}

impl PgSessionAuth {
    pub fn new(pool: DbPool, session_expiry_days: i64) -> Self {
        Self {
            pool,
            session_expiry_days,
        }
    }
}

#[async_trait]
impl SessionAuth for PgSessionAuth {
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let user = UserRepo::find_by_email(&self.pool, email)
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = verify_password(password, &user.password_hash)
            .map_err(|e| AuthError::Provider(format!("Password verification error: {e}")))?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthenticatedUser {
            user_id: user.id,
            name: user.name,
            email: user.email,
        })
    }

    async fn create_session(&self, user_id: DbId) -> Result<IssuedSession, AuthError> {
        let (token, digest) = generate_session_token();
        let expires_at = Utc::now() + chrono::Duration::days(self.session_expiry_days);

        let input = CreateSession {
            user_id,
            token_hash: digest,
            expires_at,
        };
        SessionRepo::create(&self.pool, &input)
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        Ok(IssuedSession { token, expires_at })
    }

    async fn resolve_session(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let digest = hash_session_token(token);

        let session = SessionRepo::find_by_token_hash(&self.pool, &digest)
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?
            .ok_or(AuthError::NoSession)?;

        let user = UserRepo::find_by_id(&self.pool, session.user_id)
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?
            .ok_or(AuthError::NoSession)?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            name: user.name,
            email: user.email,
        })
    }

    async fn destroy_sessions(&self, user_id: DbId) -> Result<(), AuthError> {
        SessionRepo::revoke_all_for_user(&self.pool, user_id)
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;
        Ok(())
    }
}
