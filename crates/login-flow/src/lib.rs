//! Email-based passwordless login flow.
//!
//! `LoginFlow` drives the whole exchange: collect and validate an email,
//! confirm consent, request a verification challenge, poll until the
//! emailed confirmation link is followed, and hand back the credential.

mod api;
mod collab;
pub mod email;
mod error;
mod flow;

pub use api::RegistrationApi;
pub use collab::{Presenter, ProgressHandle, Prompter};
pub use error::LoginError;
pub use flow::{FlowOptions, LoginFlow, LoginOutcome, DEFAULT_POLL_INTERVAL};
