//! HTTP helper for the account creation endpoint.
//!
//! One attempt per call: no retries, no timeout, no idempotency key. Every
//! failure (transport, non-2xx status, unreadable body) reaches the caller
//! as the same [`SubmitError`]; the detailed cause is only logged.

use crate::{
    config::Config,
    dto::{SignupRequest, SignupResponse},
    errors::{ApiError, SubmitError},
};
use tracing::{debug, info};

/// Anything able to create an account from a validated request.
pub trait SignupApi {
    fn create_user(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<SignupResponse, SubmitError>> + Send;
}

/// `reqwest` implementation talking to `{server_url}/api/users/create`.
#[derive(Debug, Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SignupClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            endpoint: config.create_user_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        debug!("POST {}", self.endpoint);
        let response = self.http.post(self.endpoint.as_str()).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()));
        }

        // Error bodies share the success shape; fall back to the raw text.
        let (title, description) = match serde_json::from_str::<SignupResponse>(&body) {
            Ok(reason) => (reason.title, reason.description.unwrap_or_default()),
            Err(_) => (String::from("unknown"), body),
        };
        Err(ApiError::Status {
            status,
            title,
            description,
        })
    }
}

impl SignupApi for SignupClient {
    async fn create_user(&self, request: &SignupRequest) -> Result<SignupResponse, SubmitError> {
        let response = self.post(request).await?;
        info!("Account request answered: {}", response.title);
        Ok(response)
    }
}
