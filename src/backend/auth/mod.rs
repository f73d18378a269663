//! Authentication Module
//!
//! User registration, login, and stateless session management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and credential-store operations
//! ├── sessions.rs     - JWT token issue and verification
//! └── handlers/       - HTTP handlers
//!     ├── register.rs - POST /api/auth/register
//!     ├── login.rs    - POST /api/auth/login
//!     └── me.rs       - GET /api/auth/me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate input → hash password → persist user → issue token
//! 2. **Login**: look up by email → verify hash → issue token
//! 3. **Me**: bearer token resolved upstream by middleware → look up by id
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed with a configurable cost and never leave
//!   the server
//! - Tokens are HS256-signed and expire; possession of a valid token is the
//!   sole authorization proof (no server-side session store, no revocation)
//! - Unknown email and wrong password are indistinguishable to callers

/// User model and credential-store operations
pub mod users;

/// JWT token issue and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{create_token, verify_token, Claims};
pub use users::User;
