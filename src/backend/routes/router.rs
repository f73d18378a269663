//! Router Configuration
//!
//! Combines all route configurations into the final Axum router:
//!
//! 1. Base route (`GET /`) and health check (`GET /health`)
//! 2. Auth API under `/api/auth` (rate-limited; `/me` requires a token)
//! 3. CORS layer with the configured origins
//! 4. Fallback handler for unknown routes

use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::backend::routes::api_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/auth", configure_auth_routes(state.clone()))
        .layer(cors)
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to apex-core API!",
        "status": "Running",
    }))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
