//! Browser-facing helpers used by pages and state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` abstracts localStorage, `auth` holds the route-guard decision,
//! `background` spawns fire-and-forget work, and `suggestions` is the static
//! reading list shown on the dashboard.

pub mod auth;
pub mod background;
pub mod storage;
pub mod suggestions;
