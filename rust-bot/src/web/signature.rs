//! Discord interaction signature verification.
//!
//! Discord signs every interaction webhook with Ed25519 over the
//! concatenation of the timestamp header and the raw request body.
//! Reference: https://discord.com/developers/docs/interactions/overview#preparing-for-interactions

use ed25519_dalek::{Signature, VerifyingKey};
use thiserror::Error;
use tracing::warn;

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";

/// Header carrying the timestamp the signature covers.
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Failure modes of interaction signature verification.
///
/// Every variant maps to an unauthorized rejection of the request.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("missing {0} header")]
    MissingHeader(&'static str),
    #[error("public key is not a valid hex-encoded ed25519 key")]
    InvalidPublicKey,
    #[error("signature is not valid hex: {0}")]
    MalformedSignature(#[from] hex::FromHexError),
    #[error("signature must be 64 bytes, got {0}")]
    BadSignatureLength(usize),
    #[error("signature mismatch")]
    Mismatch,
}

/// Parse a hex-encoded Ed25519 public key.
///
/// Called once at startup; an invalid key is a deployment error, not a
/// per-request condition.
pub fn parse_public_key(hex_key: &str) -> Result<VerifyingKey, SignatureError> {
    let bytes = hex::decode(hex_key.trim()).map_err(|_| SignatureError::InvalidPublicKey)?;
    let bytes: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| SignatureError::InvalidPublicKey)?;
    VerifyingKey::from_bytes(&bytes).map_err(|_| SignatureError::InvalidPublicKey)
}

/// Verify an interaction request signature.
///
/// The signed message is the timestamp header concatenated with the raw
/// request body bytes. Headers are passed as options so a missing header
/// fails verification rather than the extraction layer.
///
/// # Arguments
///
/// * `public_key` - The application's Ed25519 verification key
/// * `signature` - Value of the `x-signature-ed25519` header, if present
/// * `timestamp` - Value of the `x-signature-timestamp` header, if present
/// * `body` - Raw request body bytes, exactly as received
pub fn verify(
    public_key: &VerifyingKey,
    signature: Option<&str>,
    timestamp: Option<&str>,
    body: &[u8],
) -> Result<(), SignatureError> {
    let signature = signature.ok_or_else(|| {
        warn!(header = SIGNATURE_HEADER, "interaction_signature_header_missing");
        SignatureError::MissingHeader(SIGNATURE_HEADER)
    })?;
    let timestamp = timestamp.ok_or_else(|| {
        warn!(header = TIMESTAMP_HEADER, "interaction_signature_header_missing");
        SignatureError::MissingHeader(TIMESTAMP_HEADER)
    })?;

    let signature_bytes = hex::decode(signature).map_err(|e| {
        warn!(error = %e, "interaction_signature_not_hex");
        SignatureError::from(e)
    })?;
    let signature_bytes: [u8; 64] = signature_bytes.as_slice().try_into().map_err(|_| {
        warn!(
            signature_length = signature_bytes.len(),
            "interaction_signature_bad_length"
        );
        SignatureError::BadSignatureLength(signature_bytes.len())
    })?;
    let signature = Signature::from_bytes(&signature_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    public_key.verify_strict(&message, &signature).map_err(|_| {
        warn!(
            timestamp = timestamp,
            body_length = body.len(),
            "interaction_signature_mismatch"
        );
        SignatureError::Mismatch
    })
}
