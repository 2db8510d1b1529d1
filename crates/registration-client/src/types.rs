//! Registration wire types.

use serde::{Deserialize, Serialize};

/// Identity strings sent along with registration requests.
///
/// `user_agent` travels on every request; `token_label` names the token
/// being created so the account dashboard can tell devices apart.
#[derive(Debug, Clone)]
pub struct ClientIdentity {
    pub user_agent: String,
    pub token_label: String,
}

/// Body of the "start registration" request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StartRegistrationRequest {
    pub email: String,
    #[serde(rename = "tokenName")]
    pub token_name: String,
}

/// Challenge issued by the service for a pending registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationChallenge {
    /// Opaque token correlating this attempt with its confirmation.
    pub token: String,

    /// Short human-readable code also shown in the confirmation email.
    #[serde(rename = "securityCode")]
    pub security_code: Option<String>,
}

/// Body of the verification check response. An absent or empty token
/// means the user has not confirmed yet.
#[derive(Debug, Deserialize)]
pub(crate) struct VerifyResponse {
    pub token: Option<String>,
}

/// Result of a single verification check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The user confirmed; the final credential token is attached.
    Confirmed(String),
    /// Not confirmed yet. The expected steady state while polling.
    Pending,
}
