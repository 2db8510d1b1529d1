//! The login state machine.

use crate::api::RegistrationApi;
use crate::collab::{Presenter, Prompter};
use crate::email;
use crate::error::LoginError;
use credential_store::Credential;
use registration_client::VerifyOutcome;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Fixed delay between verification checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2500);

/// Flow tuning and notice text.
#[derive(Debug, Clone)]
pub struct FlowOptions {
    pub poll_interval: Duration,
    pub terms_url: String,
    pub privacy_url: String,
}

/// Terminal result of a login run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Credential),
    /// The operator declined the terms. Deliberate, not an error.
    Aborted,
}

/// Drives the whole exchange: collect and validate an email, confirm
/// consent, request a verification challenge, poll until the emailed
/// link is followed, and hand back the final credential.
pub struct LoginFlow {
    registration: Arc<dyn RegistrationApi>,
    prompter: Arc<dyn Prompter>,
    presenter: Arc<dyn Presenter>,
    options: FlowOptions,
}

impl LoginFlow {
    /// Create a new flow with its collaborators injected.
    pub fn new(
        registration: Arc<dyn RegistrationApi>,
        prompter: Arc<dyn Prompter>,
        presenter: Arc<dyn Presenter>,
        options: FlowOptions,
    ) -> Self {
        Self {
            registration,
            prompter,
            presenter,
            options,
        }
    }

    /// Run the flow to completion.
    ///
    /// Validation failures loop back to the prompt indefinitely; a
    /// declined consent returns `Aborted`; a failed challenge request is
    /// fatal; poll failures are retried until the process is interrupted.
    pub async fn run(&self) -> Result<LoginOutcome, LoginError> {
        let email = match self.collect_email().await? {
            Some(email) => email,
            None => return Ok(LoginOutcome::Aborted),
        };

        // The one-shot request must succeed or the flow is meaningless.
        let challenge = self.registration.start_registration(&email).await?;

        self.presenter.info(&format!(
            "Please follow the link sent to {} to log in.",
            self.presenter.emphasis(&email)
        ));
        if let Some(code) = &challenge.security_code {
            self.presenter.info(&format!(
                "Verify that the provided security code in the email matches {}.",
                self.presenter.highlight(code)
            ));
        }
        self.presenter.blank_line();

        let token = self.poll_for_confirmation(&email, &challenge.token).await;

        self.presenter.blank_line();
        Ok(LoginOutcome::Authenticated(Credential::new(email, token)))
    }

    /// Prompt until a syntactically valid email is consented to.
    ///
    /// Returns `None` when the operator declines the terms.
    async fn collect_email(&self) -> Result<Option<String>, LoginError> {
        let mut previous_invalid = false;

        loop {
            let candidate = match self.prompter.read_email(previous_invalid) {
                Ok(candidate) => candidate,
                Err(e) => {
                    // Leave the half-rendered prompt on its own line.
                    self.presenter.blank_line();
                    return Err(e.into());
                }
            };
            self.presenter.blank_line();

            self.presenter.info(&format!(
                "By continuing, you declare that you agree with {} and {}.",
                self.presenter.emphasis(&self.options.terms_url),
                self.presenter.emphasis(&self.options.privacy_url),
            ));
            if !self.prompter.confirm("Continue?")? {
                self.presenter.info("Aborted.");
                return Ok(None);
            }

            if email::is_valid(&candidate) {
                return Ok(Some(candidate));
            }
            previous_invalid = true;
        }
    }

    /// Poll strictly sequentially until the service reports a final token.
    ///
    /// Errors read as still-pending: confirmation is human-paced and
    /// outlives any transient failure.
    async fn poll_for_confirmation(&self, email: &str, registration_token: &str) -> String {
        let progress = self.presenter.start_progress("Waiting for confirmation...");

        let token = loop {
            sleep(self.options.poll_interval).await;

            match self
                .registration
                .check_verification(email, registration_token)
                .await
            {
                Ok(VerifyOutcome::Confirmed(token)) => break token,
                Ok(VerifyOutcome::Pending) => {}
                Err(e) => {
                    debug!("Verification check failed, retrying: {}", e);
                }
            }
        };

        progress.set_label("Confirmed email address!");
        progress.finish("✔");
        token
    }
}
