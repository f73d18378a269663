//! Backend Error Types
//!
//! [`AuthError`] is the single error enum returned by the auth handlers and
//! middleware. Two properties of its messages are deliberate and must hold:
//!
//! - unknown-email and wrong-password logins produce the *same*
//!   `Invalid credentials` message, so callers cannot probe which accounts
//!   exist;
//! - internal failures always surface as the generic `Server error`, never
//!   the underlying cause. The cause is logged at the failure site.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by the authentication endpoints
#[derive(Debug, Error)]
pub enum AuthError {
    /// Client input error (missing field, weak password, duplicate email)
    #[error("{0}")]
    Validation(String),

    /// Bad credentials; covers both unknown email and wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, invalid, or expired bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Valid token but the underlying record no longer exists
    #[error("User not found")]
    NotFound,

    /// Too many requests against the `/api/auth` prefix
    #[error("Too many authentication attempts, please try again later.")]
    RateLimited,

    /// Unexpected failure (store unreachable, hashing or signing failure)
    #[error("Server error")]
    Internal,
}

impl AuthError {
    /// Create a validation error with a user-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            AuthError::validation("bad input").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AuthError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        assert_eq!(AuthError::Internal.to_string(), "Server error");
    }

    #[test]
    fn test_invalid_credentials_message_is_fixed() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
