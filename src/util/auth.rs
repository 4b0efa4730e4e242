//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect behavior
//! through `components::protected_route`. The decision is recomputed on each
//! navigation because the session may change between renders (logout in
//! another view or tab).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Identity;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Protected view with the identity it renders for.
    Render(Identity),
    /// Public view; no session needed.
    Public,
    /// Leave for `to`, replacing the current history entry when `replace`.
    Redirect { to: AppRoute, replace: bool },
}

/// Decide whether `route` may render for the current session.
pub fn authorize(route: AppRoute, session: &SessionStore) -> GateDecision {
    if !route.is_protected() {
        return GateDecision::Public;
    }
    match session.load() {
        Some(identity) => GateDecision::Render(identity),
        None => {
            log::info!("auth gate: no session for {}, redirecting to login", route.path());
            GateDecision::Redirect { to: AppRoute::Login, replace: true }
        }
    }
}
