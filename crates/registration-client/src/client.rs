//! Registration HTTP client.

use crate::error::RegistrationError;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Account service registration client.
///
/// A pure protocol adapter: one call per operation, no retry logic.
/// Retries are the caller's responsibility.
#[derive(Clone)]
pub struct RegistrationClient {
    client: Client,
    base_url: String,
    identity: ClientIdentity,
}

impl RegistrationClient {
    /// Create a new registration client.
    pub fn new(
        base_url: impl Into<String>,
        identity: ClientIdentity,
        timeout: Duration,
    ) -> Result<Self, RegistrationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            identity,
        })
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a registration attempt for `email`.
    ///
    /// Returns the challenge the service issued. Any non-200 status is an
    /// error; the one-shot request either succeeds or the flow is over.
    #[instrument(skip(self))]
    pub async fn start_registration(
        &self,
        email: &str,
    ) -> Result<RegistrationChallenge, RegistrationError> {
        let request = StartRegistrationRequest {
            email: email.to_string(),
            token_name: self.identity.token_label.clone(),
        };

        let response = self
            .client
            .post(format!("{}/now/registration", self.base_url))
            .header("User-Agent", &self.identity.user_agent)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            return Err(RegistrationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let challenge: RegistrationChallenge = serde_json::from_str(&body)?;
        debug!("Registration started, security code present: {}", challenge.security_code.is_some());
        Ok(challenge)
    }

    /// Check whether the registration identified by `token` has been
    /// confirmed by the user.
    ///
    /// A well-formed response without a token is `Pending`, not an error.
    #[instrument(skip(self, token))]
    pub async fn check_verification(
        &self,
        email: &str,
        token: &str,
    ) -> Result<VerifyOutcome, RegistrationError> {
        let response = self
            .client
            .get(format!("{}/now/registration/verify", self.base_url))
            .query(&[("email", email), ("token", token)])
            .header("User-Agent", &self.identity.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RegistrationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let verify: VerifyResponse = serde_json::from_str(&body)?;

        match verify.token {
            Some(token) if !token.is_empty() => Ok(VerifyOutcome::Confirmed(token)),
            _ => Ok(VerifyOutcome::Pending),
        }
    }
}
