//! Auth gateway trait and HTTP implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::error::GatewayError;
use crate::config::Config;

/// Credentials for an existing account
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Full signup payload; field names match the platform API
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub restaurant_name: String,
    pub restaurant_type: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub owner_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
    pub agree_to_marketing: bool,
}

/// Body returned by both auth endpoints on success
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    /// Bearer token; the platform may omit it
    #[serde(default)]
    pub token: Option<String>,
}

/// Body the platform sends with rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// The two platform auth operations
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Sign in to an existing account
    async fn sign_in(&self, request: &LoginRequest) -> Result<AuthResponse, GatewayError>;

    /// Register a new restaurant account
    async fn sign_up(&self, request: &SignupRequest) -> Result<AuthResponse, GatewayError>;
}

/// reqwest-backed gateway against the configured API base URL
pub struct HttpAuthGateway {
    client: Client,
    login_url: String,
    signup_url: String,
}

impl HttpAuthGateway {
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| GatewayError::network(e.to_string()))?;

        Ok(Self {
            client,
            login_url: config.login_url(),
            signup_url: config.signup_url(),
        })
    }

    /// Single-shot POST; no retry
    async fn post_json<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<AuthResponse, GatewayError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            warn!(status = status.as_u16(), "Auth request rejected");
            return Err(GatewayError::rejected(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::decode(e.to_string()))
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn sign_in(&self, request: &LoginRequest) -> Result<AuthResponse, GatewayError> {
        debug!(email = %request.email, "Signing in");
        self.post_json(&self.login_url, request).await
    }

    async fn sign_up(&self, request: &SignupRequest) -> Result<AuthResponse, GatewayError> {
        debug!(restaurant = %request.restaurant_name, "Signing up");
        self.post_json(&self.signup_url, request).await
    }
}
