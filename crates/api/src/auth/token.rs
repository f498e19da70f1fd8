//! Opaque session tokens.
//!
//! A token is a random string handed to the client exactly once; only its
//! SHA-256 digest is stored, so a database leak does not expose live
//! sessions.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a session token.
///
/// Returns `(plaintext, sha256_hex_digest)`. The plaintext goes to the
/// client; only the digest is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let digest = hash_session_token(&plaintext);
    (plaintext, digest)
}

/// Hex SHA-256 digest of a session token.
///
/// Use this to compare an incoming bearer token against the stored digest.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
