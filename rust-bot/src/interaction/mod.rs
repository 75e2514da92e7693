//! Interaction classification and response production.
//!
//! ## Processing Flow
//!
//! ```text
//! Interaction → classify() → InteractionKind → respond() → InteractionResponse
//! ```

pub mod types;
pub mod zen;

use tracing::info;

pub use types::{
    CommandData, Interaction, InteractionResponse, ResponseData, ResponseType,
    INTERACTION_APPLICATION_COMMAND, INTERACTION_PING,
};
pub use zen::{pick_zenism, ZENISMS, ZEN_COMMAND};

/// Content returned for command names with no registered handler.
pub const FALLBACK_CONTENT: &str = "BEEP BOOP";

/// A decoded interaction, reduced to the two cases the handler acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionKind {
    /// Platform-initiated handshake ping
    Ping,
    /// Slash-command invocation, carrying the command name
    Command(String),
}

/// Classify a decoded interaction payload.
///
/// Everything that is not a handshake ping is treated as a command; a missing
/// `data.name` classifies as a command with an empty name.
pub fn classify(interaction: &Interaction) -> InteractionKind {
    if interaction.kind == INTERACTION_PING {
        return InteractionKind::Ping;
    }

    let name = interaction
        .data
        .as_ref()
        .map(|data| data.name.clone())
        .unwrap_or_default();

    InteractionKind::Command(name)
}

/// Produce the response for a classified interaction.
///
/// Unknown command names are a normal branch, not an error: they get the
/// fallback message so another command pointed at this endpoint still
/// receives a well-formed reply.
pub fn respond(kind: InteractionKind) -> InteractionResponse {
    match kind {
        InteractionKind::Ping => {
            info!("interaction_pong");
            InteractionResponse::pong()
        }
        InteractionKind::Command(name) if name == ZEN_COMMAND => {
            let zenism = pick_zenism();
            info!(zenism = zenism, "zen_selected");
            InteractionResponse::message(zenism)
        }
        InteractionKind::Command(name) => {
            info!(command = %name, "unknown_command_fallback");
            InteractionResponse::message(FALLBACK_CONTENT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ping() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":1}"#).unwrap();
        assert_eq!(classify(&interaction), InteractionKind::Ping);
    }

    #[test]
    fn test_classify_command() {
        let interaction: Interaction =
            serde_json::from_str(r#"{"type":2,"data":{"name":"zen"}}"#).unwrap();
        assert_eq!(
            classify(&interaction),
            InteractionKind::Command("zen".to_string())
        );
    }

    #[test]
    fn test_classify_command_defaults_to_empty_name() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":2}"#).unwrap();
        assert_eq!(
            classify(&interaction),
            InteractionKind::Command(String::new())
        );
    }

    #[test]
    fn test_respond_ping() {
        let response = respond(InteractionKind::Ping);
        assert_eq!(response, InteractionResponse::pong());
        assert!(response.data.is_none());
    }

    #[test]
    fn test_respond_zen_draws_from_catalog() {
        let response = respond(InteractionKind::Command("zen".to_string()));
        assert_eq!(response.kind, ResponseType::MessageWithSource);
        let content = response.data.unwrap().content;
        assert!(ZENISMS.contains(&content.as_str()));
    }

    #[test]
    fn test_respond_unknown_command_falls_back() {
        let response = respond(InteractionKind::Command("frobnicate".to_string()));
        assert_eq!(response, InteractionResponse::message(FALLBACK_CONTENT));
    }

    #[test]
    fn test_respond_empty_command_falls_back() {
        let response = respond(InteractionKind::Command(String::new()));
        assert_eq!(response, InteractionResponse::message(FALLBACK_CONTENT));
    }
}
