//! Rate-Limit Middleware
//!
//! A fixed-window request limiter for the `/api/auth` prefix: at most
//! `max` requests per `window` per client. Clients are keyed by peer IP
//! when the server is run with connect-info; without it (in-process tests)
//! everything shares one bucket.
//!
//! Exceeding the limit answers 429 with a fixed message and does not
//! consume store or hashing work.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

struct WindowState {
    count: u32,
    window_start: Instant,
}

/// Fixed-window limiter keyed by client
#[derive(Clone)]
pub struct RateLimiter {
    max: u32,
    window: Duration,
    buckets: Arc<Mutex<HashMap<String, WindowState>>>,
}

impl RateLimiter {
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            buckets: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Record a request for `key` and report whether it is within the
    /// window's budget. Expired windows are pruned on every call so idle
    /// clients do not accumulate.
    pub fn check(&self, key: &str) -> bool {
        let mut buckets = self.buckets.lock().unwrap();
        let now = Instant::now();

        buckets.retain(|_, state| now.duration_since(state.window_start) < self.window);

        let state = buckets.entry(key.to_string()).or_insert(WindowState {
            count: 0,
            window_start: now,
        });
        state.count += 1;
        state.count <= self.max
    }
}

/// Rate-limit middleware for the auth routes
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let key = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if !state.auth_limiter.check(&key) {
        tracing::warn!("Rate limit exceeded for {}", key);
        return Err(AuthError::RateLimited);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limiter_allows_up_to_max() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        assert!(limiter.check("a"));
        assert!(limiter.check("a"));
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));
    }

    #[test]
    fn test_limiter_keys_are_independent() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));
        assert!(limiter.check("b"));
    }

    #[test]
    fn test_limiter_window_rolls_over() {
        let limiter = RateLimiter::new(1, Duration::from_millis(40));
        assert!(limiter.check("a"));
        assert!(!limiter.check("a"));
        std::thread::sleep(Duration::from_millis(60));
        assert!(limiter.check("a"));
    }
}
