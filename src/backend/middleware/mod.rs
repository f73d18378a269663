//! Middleware Module
//!
//! Request-processing middleware for the backend server:
//!
//! - **`auth`** - bearer-token verification for protected routes
//! - **`rate_limit`** - fixed-window limiting on the `/api/auth` prefix

pub mod auth;
pub mod rate_limit;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use rate_limit::{rate_limit_middleware, RateLimiter};
