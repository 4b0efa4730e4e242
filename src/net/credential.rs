//! Google ID token decoding.
//!
//! The credential handed over by Google Identity Services is a JWT. Only the
//! payload segment is read; the signature is not checked here and the backend
//! verifies the raw token on `auth/google-login`.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use super::types::Identity;

/// JWT segments are base64url; some issuers pad them, most don't.
const JWT_SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("no credential was returned by the identity provider")]
    MissingToken,
    #[error("credential is not a JWT: expected 3 segments, found {0}")]
    Malformed(usize),
    #[error("credential payload is not base64url: {0}")]
    Base64(String),
    #[error("credential payload is not an identity: {0}")]
    Json(String),
    #[error("credential identity is invalid: {0}")]
    InvalidIdentity(&'static str),
}

/// Decode the identity claims carried by `token`.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is absent, not a three-segment JWT,
/// or its payload does not describe a valid [`Identity`].
pub fn decode_credential(token: Option<&str>) -> Result<Identity, DecodeError> {
    let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(DecodeError::MissingToken)?;

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::Malformed(segments.len()));
    }

    let payload = JWT_SEGMENT
        .decode(segments[1])
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    let identity: Identity = serde_json::from_slice(&payload).map_err(|e| DecodeError::Json(e.to_string()))?;
    identity.validate().map_err(DecodeError::InvalidIdentity)?;
    Ok(identity)
}
