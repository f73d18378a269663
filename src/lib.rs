//! apex-core - Main Library
//!
//! apex-core is a multi-tier web application: an Axum HTTP server exposing
//! authentication endpoints backed by a SQLite credential store, paired with
//! a client-side session container that revalidates a persisted bearer token
//! on startup.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Wire types used by both sides
//!   - Register/login request bodies
//!   - Auth and identity responses, the public user profile
//!   - The role enumeration
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with auth handlers (register, login, me)
//!   - JWT session tokens and bcrypt password hashing
//!   - Bearer-token and rate-limit middleware
//!   - SQLite persistence via sqlx
//!
//! - **`client`** - Session-bootstrap client
//!   - HTTP API client (reqwest)
//!   - Persisted token store (OS config dir)
//!   - Session state machine with an update/subscribe contract
//!
//! # Authentication Flow
//!
//! 1. **Register/Login**: credentials in, `{token, user}` out
//! 2. **Bearer token**: presented on each request; no server-side sessions
//! 3. **Session bootstrap**: the client revalidates a cached token against
//!    `GET /api/auth/me` on startup, clearing it on any failure

/// Wire types shared between server and client
pub mod shared;

/// Backend server-side code
pub mod backend;

/// Session-bootstrap client
pub mod client;
