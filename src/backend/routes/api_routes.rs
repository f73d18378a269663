//! Auth API Routes
//!
//! Configures the `/api/auth` endpoints:
//!
//! - `POST /api/auth/register` - public
//! - `POST /api/auth/login` - public
//! - `GET /api/auth/me` - requires a bearer token (auth middleware)
//!
//! The whole group sits behind the fixed-window rate limiter; the auth
//! middleware is a `route_layer` on `/me` only, so register and login stay
//! reachable without a token.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::middleware::rate_limit::rate_limit_middleware;
use crate::backend::server::state::AppState;

/// Configure the auth route group
pub fn configure_auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route(
            "/me",
            get(get_me).route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}
