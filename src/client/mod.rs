//! Client Module
//!
//! The client half of the application: an HTTP API client for the auth
//! endpoints, a persisted token store, and the session state container
//! that is rehydrated once at startup from the persisted token.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs         - Module exports
//! ├── config.rs      - Server URL configuration
//! ├── api.rs         - HTTP client for the auth endpoints
//! ├── token_store.rs - Persisted raw token (OS config dir)
//! └── session.rs     - Session state machine with subscribe support
//! ```

/// Client configuration
pub mod config;

/// HTTP client for the auth endpoints
pub mod api;

/// Persisted token storage
pub mod token_store;

/// Session state container
pub mod session;

pub use api::{ApiClient, ClientError};
pub use config::ClientConfig;
pub use session::{Session, SessionState};
pub use token_store::TokenStore;
