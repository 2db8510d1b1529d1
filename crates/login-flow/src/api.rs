//! Seam between the flow and the registration protocol.

use async_trait::async_trait;
use registration_client::{
    RegistrationChallenge, RegistrationClient, RegistrationError, VerifyOutcome,
};

/// The two registration operations the flow depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn start_registration(
        &self,
        email: &str,
    ) -> Result<RegistrationChallenge, RegistrationError>;

    async fn check_verification(
        &self,
        email: &str,
        token: &str,
    ) -> Result<VerifyOutcome, RegistrationError>;
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn start_registration(
        &self,
        email: &str,
    ) -> Result<RegistrationChallenge, RegistrationError> {
        RegistrationClient::start_registration(self, email).await
    }

    async fn check_verification(
        &self,
        email: &str,
        token: &str,
    ) -> Result<VerifyOutcome, RegistrationError> {
        RegistrationClient::check_verification(self, email, token).await
    }
}
