//! Authentication API Client
//!
//! HTTP client functions for the auth endpoints. Errors distinguish
//! transport failures from API rejections; an API rejection carries the
//! server's `{message}` body so callers can show it verbatim.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::client::config::ClientConfig;
use crate::shared::{ApiMessage, AuthResponse, LoginRequest, MeResponse, RegisterRequest, UserProfile};

/// Errors from the API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Client for the `/api/auth` endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Register a new user
    pub async fn register(
        &self,
        email: String,
        password: String,
        name: Option<String>,
    ) -> Result<AuthResponse, ClientError> {
        let request = RegisterRequest {
            email,
            password,
            name,
        };
        let response = self
            .http
            .post(self.config.api_url("/api/auth/register"))
            .json(&request)
            .send()
            .await?;
        read_json(response).await
    }

    /// Log in with email and password
    pub async fn login(&self, email: String, password: String) -> Result<AuthResponse, ClientError> {
        let request = LoginRequest { email, password };
        let response = self
            .http
            .post(self.config.api_url("/api/auth/login"))
            .json(&request)
            .send()
            .await?;
        read_json(response).await
    }

    /// Get the current user for a bearer token
    pub async fn me(&self, token: &str) -> Result<UserProfile, ClientError> {
        let response = self
            .http
            .get(self.config.api_url("/api/auth/me"))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        let me: MeResponse = read_json(response).await?;
        Ok(me.user)
    }
}

/// Decode a success body, or turn a non-success status into
/// [`ClientError::Api`] with the server's message.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = match response.json::<ApiMessage>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
