//! Server Module
//!
//! Server-side foundation: configuration loading, application state, and
//! initialization of the Axum app.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - AppConfig parsed once from the environment
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Pool connection, migrations, router assembly
//! ```

/// Application configuration
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{AppConfig, ConfigError};
pub use init::{create_app, init_state};
pub use state::AppState;
