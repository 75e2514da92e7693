//! Web server module for the interactions endpoint.
//!
//! This module provides a thin axum server that:
//! - Receives interaction webhooks from Discord
//! - Verifies the Ed25519 request signature
//! - Answers pings and slash commands synchronously

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod signature;

pub use handlers::{health, interactions, AppState, HealthResponse};
pub use signature::{parse_public_key, verify, SignatureError, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Build the application router.
///
/// Shared between the server binary and the end-to-end tests so both exercise
/// the same routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/interactions", post(interactions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
