//! Identity Lookup Handler
//!
//! Implements GET /api/auth/me. The bearer token has already been resolved
//! into an [`AuthUser`] by the auth middleware; this handler only looks the
//! id up in the store. A valid token whose user has since been deleted
//! answers 404, not 401 — the distinction is why the middleware never
//! consults the store itself.

use axum::extract::State;
use axum::response::Json;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::AuthError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::MeResponse;

/// Identity lookup handler
///
/// # Errors
///
/// * `401 Unauthorized` - no resolved identity (rejected by the extractor)
/// * `404 Not Found` - the user no longer exists
/// * `500 Internal Server Error` - store failure
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<MeResponse>, AuthError> {
    let user = get_user_by_id(&state.db, auth.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            AuthError::Internal
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.user_id);
            AuthError::NotFound
        })?;

    Ok(Json(MeResponse {
        user: user.profile(),
    }))
}
