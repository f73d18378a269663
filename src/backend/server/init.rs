//! Server Initialization
//!
//! Connects the credential store, applies migrations, and assembles the
//! router. Startup is fail-fast: any error here aborts the process before
//! the server binds.

use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

use crate::backend::middleware::rate_limit::RateLimiter;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;

/// Rate-limit parameters for the `/api/auth` prefix: 35 requests per
/// 15-minute window per client.
const AUTH_RATE_LIMIT_MAX: u32 = 35;
const AUTH_RATE_LIMIT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Errors raised while bringing the server up
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect the credential store and build the shared application state.
pub async fn init_state(config: AppConfig) -> Result<AppState, InitError> {
    tracing::info!("Connecting to database...");

    let options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    // An in-memory database lives and dies with its connection, so the pool
    // must hold exactly one and never recycle it.
    let mut pool_options = SqlitePoolOptions::new();
    if config.database_url.contains(":memory:") {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(AppState {
        db: pool,
        config: Arc::new(config),
        auth_limiter: RateLimiter::new(AUTH_RATE_LIMIT_MAX, AUTH_RATE_LIMIT_WINDOW),
        started_at: Instant::now(),
    })
}

/// Create the fully configured Axum application.
pub async fn create_app(config: AppConfig) -> Result<Router, InitError> {
    let state = init_state(config).await?;
    Ok(create_router(state))
}
