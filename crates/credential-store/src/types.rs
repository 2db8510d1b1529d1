//! Credential types.

use serde::{Deserialize, Serialize};

/// The durable credential produced by a successful login.
///
/// `token` is only ever non-empty after the service has confirmed the
/// email out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub token: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }
}
