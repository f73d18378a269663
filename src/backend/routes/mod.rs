//! Route Configuration Module
//!
//! Router assembly for the backend server:
//!
//! - **`router`** - top-level router (base/health routes, CORS, fallback)
//! - **`api_routes`** - the `/api/auth` endpoints with their middleware

pub mod api_routes;
pub mod router;

pub use router::create_router;
