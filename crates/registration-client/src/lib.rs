//! Account service registration API client.

mod client;
mod error;
mod types;

pub use client::RegistrationClient;
pub use error::RegistrationError;
pub use types::{ClientIdentity, RegistrationChallenge, VerifyOutcome};
