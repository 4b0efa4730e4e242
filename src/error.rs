//! Error taxonomy shared by the request flows.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Validation and session-expiry errors are turned into
//! prompts or redirects by the pages; network errors on best-effort calls are
//! logged and absorbed; network errors on submission are shown to the user.
//! Credential, storage, and config errors live next to their modules.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Input rejected locally before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: &'static str,
}

/// An Identity was required mid-flow but the session is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("session expired; sign in again")]
pub struct SessionExpired;

/// A backend call that did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Why a summarization attempt did not deliver a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a summary request is already in flight")]
    InFlight,
    #[error(transparent)]
    SessionExpired(#[from] SessionExpired),
    #[error("failed to summarize: {0}")]
    Network(#[from] NetworkError),
}

impl SubmitError {
    /// Whether the caller should send the user back to the login entry.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::SessionExpired(_))
    }
}
