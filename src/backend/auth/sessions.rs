//! Session Tokens
//!
//! JWT issue and verification for stateless sessions. Tokens embed the user
//! id, email, and role, are HS256-signed with the configured secret, and are
//! valid strictly until their embedded expiry: there is no server-side
//! session store and no revocation.
//!
//! The signing secret and expiry come from [`AppConfig`] and are passed in
//! explicitly; this module never reads the environment.
//!
//! [`AppConfig`]: crate::backend::server::config::AppConfig

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::Role;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Role at issue time
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a signed token for a user.
///
/// The expiry duration is the caller's; handlers pass the configured global
/// default.
pub fn create_token(
    user: &User,
    secret: &str,
    expiry: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role,
        exp: now + expiry.as_secs(),
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token.
///
/// Checks the signature and the embedded expiry; the caller treats any
/// error uniformly as "unauthenticated".
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}
