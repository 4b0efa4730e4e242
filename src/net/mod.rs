//! Networking and identity-provider modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the summarization backend, `credential` turns
//! Google ID tokens into identities, `google` binds the Google Identity
//! Services script, and `types` defines the shared wire schema.

pub mod api;
pub mod credential;
pub mod google;
pub mod types;
