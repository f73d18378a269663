//! Backend Error Module
//!
//! Error types for the HTTP handlers and their conversion into responses.
//! Every error a handler can produce flows through [`AuthError`], which maps
//! onto the fixed status/message taxonomy of the API:
//!
//! - validation failures and bad credentials → 400
//! - missing/invalid/expired tokens → 401
//! - valid token but missing record → 404
//! - rate limiting → 429
//! - anything unexpected → 500 with a generic message, details logged
//!   server-side only

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::AuthError;
