//! Application State Management
//!
//! Defines the central [`AppState`] container and the `FromRef`
//! implementations that let handlers extract just the piece of state they
//! need.
//!
//! # Thread Safety
//!
//! Every field is cheap to clone and safe to share: the sqlx pool is
//! internally reference-counted, the configuration is immutable behind an
//! `Arc`, and the rate limiter guards its window counters with a mutex.
//! No other cross-request mutable state exists.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::middleware::rate_limit::RateLimiter;
use crate::backend::server::config::AppConfig;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the credential store
    pub db: SqlitePool,

    /// Immutable server configuration (signing secret, expiry, hash cost)
    pub config: Arc<AppConfig>,

    /// Fixed-window limiter applied to the `/api/auth` prefix
    pub auth_limiter: RateLimiter,

    /// Process start time, reported by the health endpoint
    pub started_at: Instant,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for RateLimiter {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_limiter.clone()
    }
}
