//! Authentication Middleware
//!
//! Protects routes that require a logged-in user. The middleware extracts
//! the bearer token from the `Authorization` header, verifies it, and
//! attaches the resolved identity to the request extensions; handlers pick
//! it up through the [`AuthUser`] extractor.
//!
//! Every failure mode — missing header, malformed header, bad signature,
//! expired token — answers a uniform 401. The middleware never touches the
//! credential store: whether the user behind a valid token still exists is
//! the handler's question.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// Identity resolved from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Authentication middleware
///
/// 1. Extract the token from the `Authorization: Bearer <token>` header
/// 2. Verify signature and expiry
/// 3. Attach [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 if any step fails.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::Unauthorized
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        AuthError::Unauthorized
    })?;

    let claims = verify_token(token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        AuthError::Unauthorized
    })?;

    // A token whose subject is not a well-formed id is just an invalid token
    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        AuthError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::Unauthorized
            })
    }
}
