//! Passwordless login CLI - main entry point.

mod config;
mod error;
mod identity;
mod prompt;
mod term;

use crate::config::Config;
use crate::error::AppResult;
use anyhow::Context;
use credential_store::CredentialStore;
use login_flow::{FlowOptions, LoginFlow, LoginOutcome};
use registration_client::RegistrationClient;
use std::sync::Arc;
use tokio::signal;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.cli.log_level);

    let identity = identity::client_identity();
    debug!("Client identity: {}", identity.user_agent);

    let registration = RegistrationClient::new(
        &config.registration.service_url,
        identity,
        config.registration.request_timeout,
    )?;

    let store = match &config.credentials.path {
        Some(path) => CredentialStore::new(path),
        None => CredentialStore::new(
            CredentialStore::default_path()
                .context("Could not determine a home directory for credentials")?,
        ),
    };

    let flow = LoginFlow::new(
        Arc::new(registration),
        Arc::new(prompt::TerminalPrompter),
        Arc::new(term::TerminalPresenter),
        FlowOptions {
            poll_interval: config.registration.poll_interval,
            terms_url: config.cli.terms_url.clone(),
            privacy_url: config.cli.privacy_url.clone(),
        },
    );

    // The poll loop has no internal timeout; Ctrl-C is the boundary
    // where a stuck login gets cancelled.
    let outcome = tokio::select! {
        outcome = flow.run() => outcome?,
        _ = signal::ctrl_c() => {
            println!();
            return Ok(());
        }
    };

    match outcome {
        LoginOutcome::Authenticated(credential) => {
            store.merge(&credential)?;
            info!("Logged in as {}", credential.email);
        }
        LoginOutcome::Aborted => {}
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
