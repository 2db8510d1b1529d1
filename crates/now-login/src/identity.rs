//! Client identity strings for registration requests.

use registration_client::ClientIdentity;
use std::env::consts::{ARCH, OS};

const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the identity sent with registration requests.
///
/// The token label names this device in the account dashboard, so it
/// carries platform, architecture, version, and hostname.
pub fn client_identity() -> ClientIdentity {
    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".into());

    ClientIdentity {
        user_agent: format!("now-login/{} {}-{}", CLIENT_VERSION, OS, ARCH),
        token_label: format!("Now CLI {}-{} {} ({})", OS, ARCH, CLIENT_VERSION, host),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_shape() {
        let identity = client_identity();

        assert!(identity.user_agent.starts_with("now-login/"));
        assert!(identity.user_agent.contains(OS));
        assert!(identity.user_agent.contains(ARCH));
    }

    #[test]
    fn test_token_label_names_the_device() {
        let identity = client_identity();

        assert!(identity.token_label.starts_with("Now CLI"));
        assert!(identity.token_label.contains(CLIENT_VERSION));
        assert!(identity.token_label.ends_with(')'));
    }
}
