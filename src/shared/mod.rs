//! Shared Module
//!
//! Types that cross the wire between the backend and the client. Everything
//! here is serde-serializable and carries no server-only state.

/// Authentication request/response types and the public user profile
pub mod auth;

pub use auth::{
    ApiMessage, AuthResponse, LoginRequest, MeResponse, RegisterRequest, Role, UserProfile,
};
