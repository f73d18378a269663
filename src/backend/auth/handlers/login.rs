//! Login Handler
//!
//! Implements user authentication for POST /api/auth/login.
//!
//! # Security
//!
//! An unknown email and a wrong password both answer with the identical
//! `400 {"message":"Invalid credentials"}` body so callers cannot tell
//! which half failed. Login deliberately checks only field presence — the
//! stricter format checks belong to registration.

use axum::extract::State;
use axum::response::Json;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, unknown email, or wrong password
///   (the latter two indistinguishable)
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AuthError::validation("Email and password are required"));
    }

    let user = get_user_by_email(&state.db, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            AuthError::Internal
        })?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            AuthError::InvalidCredentials
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        AuthError::Internal
    })?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(AuthError::InvalidCredentials);
    }

    let token = create_token(&user, &state.config.jwt_secret, state.config.token_expiry)
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            AuthError::Internal
        })?;

    tracing::info!("User logged in: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}
