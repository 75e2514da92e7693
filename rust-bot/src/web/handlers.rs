//! Interaction endpoint handlers.
//!
//! The interactions handler does all its work inline:
//! 1. Verify the Ed25519 signature over the raw body
//! 2. Decode the payload
//! 3. Classify and answer in the same request
//!
//! The signature covers the raw body bytes, so the body is taken as `Bytes`
//! and only parsed after verification succeeds.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use ed25519_dalek::VerifyingKey;
use serde::Serialize;
use tracing::{info, warn};

use crate::interaction::{classify, respond, Interaction};
use crate::web::signature::{self, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub public_key: VerifyingKey,
}

impl AppState {
    pub fn new(config: Config, public_key: VerifyingKey) -> Self {
        Self {
            config: Arc::new(config),
            public_key,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Interactions Webhook
// =============================================================================

/// Interactions webhook endpoint.
///
/// Rejections carry no body: an invalid signature is 401, a body that fails
/// to decode after a valid signature is 400. Everything that passes both
/// gates gets a 200 with an interaction response.
pub async fn interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());
    let timestamp = headers.get(TIMESTAMP_HEADER).and_then(|v| v.to_str().ok());

    info!(
        body_length = body.len(),
        has_signature = signature.is_some(),
        "interaction_received"
    );

    if let Err(e) = signature::verify(&state.public_key, signature, timestamp, &body) {
        warn!(error = %e, "interaction_rejected_unauthorized");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let interaction: Interaction = match serde_json::from_slice(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            warn!(error = %e, "interaction_payload_malformed");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let response = respond(classify(&interaction));

    info!(response_type = response.kind as u8, "interaction_answered");

    (StatusCode::OK, Json(response)).into_response()
}
