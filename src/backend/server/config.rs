//! Server Configuration
//!
//! Loads and validates server configuration from the process environment.
//! Configuration is read once at startup into an immutable [`AppConfig`]
//! that is passed explicitly to the services that need it; nothing reads
//! environment variables after startup.
//!
//! # Required Variables
//!
//! - `JWT_SECRET` - token signing secret; startup fails fast when absent
//! - `DATABASE_URL` - sqlx connection string for the credential store
//!
//! # Optional Variables
//!
//! - `PORT` - listen port (default 4000)
//! - `JWT_EXPIRES_IN` - token lifetime, e.g. `1d`, `12h`, `30m`, `45s`, or
//!   bare seconds (default `1d`)
//! - `BCRYPT_ROUNDS` - password hash cost factor (default 12)
//! - `CORS_ORIGIN` - comma-separated allowed origins
//!   (default `http://localhost:3000`)

use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_EXPIRY: &str = "1d";
const DEFAULT_BCRYPT_ROUNDS: u32 = 12;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Configuration errors reported at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}

/// Immutable server configuration, constructed once at process start
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port for the HTTP server
    pub port: u16,
    /// Connection string for the credential store
    pub database_url: String,
    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_expiry: Duration,
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
    /// Origins allowed by the CORS layer
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Fails when a required variable is absent or a value cannot be
    /// parsed, so misconfiguration surfaces before the server binds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = require_var("JWT_SECRET")?;
        let database_url = require_var("DATABASE_URL")?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let expiry_raw =
            std::env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| DEFAULT_EXPIRY.to_string());
        let token_expiry = parse_expiry(&expiry_raw).ok_or(ConfigError::InvalidVar {
            var: "JWT_EXPIRES_IN",
            value: expiry_raw,
        })?;

        let bcrypt_cost = match std::env::var("BCRYPT_ROUNDS") {
            Ok(raw) => {
                let cost = raw.parse::<u32>().map_err(|_| ConfigError::InvalidVar {
                    var: "BCRYPT_ROUNDS",
                    value: raw,
                })?;
                // bcrypt only accepts costs in 4..=31
                cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST)
            }
            Err(_) => DEFAULT_BCRYPT_ROUNDS,
        };

        let cors_origins = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            token_expiry,
            bcrypt_cost,
            cors_origins,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Parse an expiry string into a duration.
///
/// Accepts `<n>d`, `<n>h`, `<n>m`, `<n>s`, or a bare number of seconds.
pub fn parse_expiry(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let (digits, multiplier) = match raw.char_indices().last()? {
        (i, 'd') => (&raw[..i], 86_400),
        (i, 'h') => (&raw[..i], 3_600),
        (i, 'm') => (&raw[..i], 60),
        (i, 's') => (&raw[..i], 1),
        (_, c) if c.is_ascii_digit() => (raw, 1),
        _ => return None,
    };
    let value: u64 = digits.parse().ok()?;
    Some(Duration::from_secs(value * multiplier))
}
