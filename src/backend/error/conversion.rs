//! Error Conversion
//!
//! Converts [`AuthError`] into HTTP responses. Every error becomes a JSON
//! body of the shape `{"message": "..."}` with the status from
//! [`AuthError::status_code`], so handlers can return the enum directly.

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::AuthError;
use crate::shared::ApiMessage;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ApiMessage {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
