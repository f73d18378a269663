//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints:
//!
//! - **`register`** - POST /api/auth/register - user registration
//! - **`login`** - POST /api/auth/login - user authentication
//! - **`get_me`** - GET /api/auth/me - identity lookup for the bearer token
//!
//! Request/response types live in [`crate::shared::auth`] so the client can
//! reuse them.

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Identity lookup handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
