//! Zenbot - Discord slash-command interactions service.
//!
//! This library provides shared modules for the two zenbot binaries:
//! - `zenbot-web`: Webhook server answering interactions
//! - `zenbot-register`: One-shot slash-command registration utility
//!
//! ## Request Flow
//!
//! ```text
//! Discord → POST /interactions → verify signature → classify → respond
//! ```

pub mod config;
pub mod interaction;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use interaction::{
    classify, respond, Interaction, InteractionKind, InteractionResponse, ResponseType,
};
pub use web::AppState;
