//! Backend Module
//!
//! All server-side code for the apex-core application: an Axum HTTP server
//! with stateless bearer-token authentication over a SQLite credential store.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User store, JWT sessions, auth handlers
//! - **`middleware`** - Bearer-token verification and rate limiting
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Concurrency Model
//!
//! Each request is handled independently; there is no cross-request mutable
//! state apart from the credential store (whose consistency, including the
//! email-uniqueness constraint, is delegated to SQLite) and the rate
//! limiter's window counters. Tokens are immutable once issued, so no
//! locking is needed around authentication itself.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::AuthError;
pub use server::state::AppState;
