//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Login error: {0}")]
    Login(#[from] login_flow::LoginError),

    #[error("Registration error: {0}")]
    Registration(#[from] registration_client::RegistrationError),

    #[error("Credential storage error: {0}")]
    Credentials(#[from] credential_store::CredentialError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
