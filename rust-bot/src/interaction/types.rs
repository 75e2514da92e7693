//! Wire types for the interactions webhook.
//!
//! This module defines the JSON shapes exchanged with Discord:
//! - `Interaction`: inbound event payload (handshake ping or slash command)
//! - `InteractionResponse`: synchronous reply returned from the same request
//!
//! Payloads are decoded once at the HTTP boundary into these types; nothing
//! downstream probes raw JSON.

use serde::{Deserialize, Serialize, Serializer};

/// Inbound interaction type code for a handshake ping.
pub const INTERACTION_PING: u8 = 1;

/// Inbound interaction type code for a slash-command invocation.
pub const INTERACTION_APPLICATION_COMMAND: u8 = 2;

// =============================================================================
// Inbound Types
// =============================================================================

/// An inbound interaction event.
///
/// Discord sends `{"type": 1}` for handshake pings and
/// `{"type": 2, "data": {"name": ...}}` for command invocations.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    /// Interaction type code (1 = ping, 2 = application command)
    #[serde(rename = "type")]
    pub kind: u8,
    /// Command payload, present only for command invocations
    #[serde(default)]
    pub data: Option<CommandData>,
}

/// Command payload carried by a command invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    /// Name of the invoked slash command
    #[serde(default)]
    pub name: String,
}

// =============================================================================
// Outbound Types
// =============================================================================

/// Response type codes understood by Discord.
///
/// Serialized as the bare integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ResponseType {
    Pong = 1,
    AckNoSource = 2,
    MessageNoSource = 3,
    MessageWithSource = 4,
    AckWithSource = 5,
}

impl Serialize for ResponseType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Synchronous reply to an interaction.
///
/// The `data` field is omitted from the JSON entirely when absent, so a pong
/// serializes to exactly `{"type":1}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    /// Response type code
    #[serde(rename = "type")]
    pub kind: ResponseType,
    /// Message content shown to the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

/// Visible content of a message response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseData {
    pub content: String,
}

impl InteractionResponse {
    /// Acknowledge a handshake ping.
    pub fn pong() -> Self {
        Self {
            kind: ResponseType::Pong,
            data: None,
        }
    }

    /// Reply with a visible message.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::MessageWithSource,
            data: Some(ResponseData {
                content: content.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_ping_deserialization() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":1}"#).unwrap();
        assert_eq!(interaction.kind, INTERACTION_PING);
        assert!(interaction.data.is_none());
    }

    #[test]
    fn test_interaction_command_deserialization() {
        let interaction: Interaction =
            serde_json::from_str(r#"{"type":2,"data":{"name":"zen"}}"#).unwrap();
        assert_eq!(interaction.kind, INTERACTION_APPLICATION_COMMAND);
        assert_eq!(interaction.data.unwrap().name, "zen");
    }

    #[test]
    fn test_interaction_command_without_name() {
        let interaction: Interaction =
            serde_json::from_str(r#"{"type":2,"data":{}}"#).unwrap();
        assert_eq!(interaction.data.unwrap().name, "");
    }

    #[test]
    fn test_pong_serializes_without_data_field() {
        let json = serde_json::to_string(&InteractionResponse::pong()).unwrap();
        assert_eq!(json, r#"{"type":1}"#);
    }

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_string(&InteractionResponse::message("BEEP BOOP")).unwrap();
        assert_eq!(json, r#"{"type":4,"data":{"content":"BEEP BOOP"}}"#);
    }

    #[test]
    fn test_response_type_codes() {
        assert_eq!(ResponseType::Pong as u8, 1);
        assert_eq!(ResponseType::AckNoSource as u8, 2);
        assert_eq!(ResponseType::MessageNoSource as u8, 3);
        assert_eq!(ResponseType::MessageWithSource as u8, 4);
        assert_eq!(ResponseType::AckWithSource as u8, 5);
    }
}
