//! Authentication Wire Types
//!
//! Request and response bodies for the `/api/auth` endpoints, shared by the
//! server handlers and the client API. The `UserProfile` here is the only
//! user projection that ever leaves the server: it carries no password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role, stored as TEXT in the credential store.
///
/// New registrations always get [`Role::User`]; `Admin` exists so the role
/// claim in issued tokens is a closed set rather than a free-form string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Registration request
///
/// `email` and `password` default to empty when absent so the handlers can
/// answer a missing field with the same client error as an empty one.
/// `name` is optional; a missing field and an explicit null are equivalent.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public user projection (no sensitive data)
///
/// Returned by register, login, and the identity endpoint. The `id` is the
/// stringified store identifier; clients treat it as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Response from register (201) and login (200)
///
/// The token is a signed bearer credential; the client persists it verbatim
/// and never inspects it.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Response from `GET /api/auth/me`
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// Error body shape used by every non-2xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
