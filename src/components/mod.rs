//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and dialogs; the route guard lives here too
//! because every protected route wraps its page in it.

pub mod feature_card;
pub mod profile_header;
pub mod protected_route;
pub mod submit_modal;
