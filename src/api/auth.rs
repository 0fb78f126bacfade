use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::api::types::{ApiMessage, AuthOk, AuthRequest};
use crate::error::ApiError;

const USER_AGENT: &str = concat!("nyumba/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the authentication service
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client for the auth service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Exchange credentials for the account identifier
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/login", self.base_url);
        debug!("Signing in {} at {}", email, url);

        let response = self
            .client
            .post(&url)
            .json(&AuthRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(rejection(response, status).await);
        }

        let body: AuthOk = response.json().await?;
        // the service echoes the account email on success
        Ok(body.email.unwrap_or_else(|| email.to_string()))
    }

    /// Register a new account; the submitted email becomes the identifier
    pub async fn signup(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/signup", self.base_url);
        debug!("Creating account {} at {}", email, url);

        let response = self
            .client
            .post(&url)
            .json(&AuthRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(rejection(response, status).await);
        }

        // 201 carries only a confirmation message
        let _body: AuthOk = response.json().await?;
        Ok(email.to_string())
    }
}

/// Prefer the service's own message on a non-success response
async fn rejection(response: Response, status: StatusCode) -> ApiError {
    match response.json::<ApiMessage>().await {
        Ok(body) => ApiError::Rejected(body.error),
        Err(_) => ApiError::Status(status),
    }
}
