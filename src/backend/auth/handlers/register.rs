//! Registration Handler
//!
//! Implements user registration for POST /api/auth/register.
//!
//! # Registration Process
//!
//! 1. Validate input (presence, password length, email shape — in that
//!    order; the first failure wins)
//! 2. Reject if a user with the same email already exists
//! 3. Hash the password with bcrypt at the configured cost
//! 4. Persist the user with the default role
//! 5. Issue a signed token and return it with the public profile
//!
//! No partial state is created on any failure path: the user row is the
//! only side effect and it is written exactly once, after validation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, RegisterRequest};

/// Validate the email shape: `local@domain.tld`, no whitespace, exactly
/// one `@`, and a dot with non-empty sides in the domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, short password, malformed email,
///   or an email that is already registered
/// * `500 Internal Server Error` - store, hashing, or signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AuthError::validation("Email and password are required"));
    }
    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(AuthError::validation(
            "Password must be at least 8 characters",
        ));
    }
    if !is_valid_email(&request.email) {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(AuthError::validation("Invalid email format"));
    }

    let existing = get_user_by_email(&state.db, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            AuthError::Internal
        })?;
    if existing.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(AuthError::validation("User already exists"));
    }

    let password_hash =
        bcrypt::hash(&request.password, state.config.bcrypt_cost).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            AuthError::Internal
        })?;

    let user = create_user(
        &state.db,
        &request.email,
        &password_hash,
        request.name.as_deref(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to create user: {:?}", e);
        AuthError::Internal
    })?;

    let token = create_token(&user, &state.config.jwt_secret, state.config.token_expiry)
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            AuthError::Internal
        })?;

    tracing::info!("User created: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.profile(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("user+tag@example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }
}
