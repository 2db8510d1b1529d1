//! Login flow errors.

use registration_client::RegistrationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    /// Operator input could not be read (stream closed, terminal gone).
    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),

    /// The one-shot challenge request failed. Never raised from the
    /// poll loop, where failures read as still-pending.
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),
}
