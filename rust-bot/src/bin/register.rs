//! Zenbot Register - one-shot slash-command registration.
//!
//! Registers each command descriptor with Discord's application-commands API.
//! This runs out-of-band from the web server; it is never part of the
//! request-serving path.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use zenbot::Config;

/// Command type code for a CHAT_INPUT (slash) command.
const CHAT_INPUT: u8 = 1;

/// Descriptor POSTed to the application-commands endpoint.
#[derive(Debug, Serialize)]
struct CommandDescriptor {
    name: &'static str,
    #[serde(rename = "type")]
    kind: u8,
    description: &'static str,
}

/// Commands this application registers.
const COMMANDS: &[CommandDescriptor] = &[CommandDescriptor {
    name: "zen",
    kind: CHAT_INPUT,
    description: "Make zen",
}];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("register_starting");

    // Load configuration
    let config = Config::from_env();
    if config.app_id.is_empty() {
        bail!("APP_ID must be set");
    }
    if config.bot_token.is_empty() {
        bail!("BOT_TOKEN must be set");
    }

    let url = format!(
        "{}/applications/{}/commands",
        config.api_base, config.app_id
    );
    info!(url = %url, commands = COMMANDS.len(), "config_loaded");

    let client = Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    for command in COMMANDS {
        let response = client
            .post(&url)
            .header("Authorization", format!("Bot {}", config.bot_token))
            .json(command)
            .send()
            .await
            .with_context(|| format!("Failed to register command '{}'", command.name))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            info!(
                command = command.name,
                status_code = status.as_u16(),
                response = %body,
                "command_registered"
            );
        } else {
            error!(
                command = command.name,
                status_code = status.as_u16(),
                response = %body,
                "command_registration_failed"
            );
            bail!(
                "Registration of '{}' failed with status {}",
                command.name,
                status
            );
        }
    }

    info!("register_complete");

    Ok(())
}
