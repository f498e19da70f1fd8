use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::auth::provider::SessionAuth;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: finboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Session-auth capability; tests substitute a fake provider.
    pub auth: Arc<dyn SessionAuth>,
    /// Monotonic version of the invoice listing view. Bumped after every
    /// successful write so clients know a cached listing is stale.
    pub listing_version: Arc<AtomicU64>,
}

impl AppState {
    /// Mark the invoice listing stale, returning the new version.
    pub fn bump_listing_version(&self) -> u64 {
        self.listing_version.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current listing version.
    pub fn listing_version(&self) -> u64 {
        self.listing_version.load(Ordering::Relaxed)
    }
}
