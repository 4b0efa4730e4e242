//! Login flow: credential exchange for a local session.
//!
//! DESIGN
//! ======
//! `Idle → Authenticating → {Authenticated | Failed}`. The local session is
//! saved before the caller navigates; the backend notification runs afterwards
//! as a background task whose failure is logged and otherwise ignored. A
//! failed attempt always leaves the session cleared.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::error::NetworkError;
use crate::net::api::SummaryBackend;
use crate::net::credential::{DecodeError, decode_credential};
use crate::net::types::Identity;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    /// Held only while `accept_credential` decodes; never observed by the view.
    Authenticating,
    Authenticated(Identity),
    /// Message shown to the user; the widget stays usable.
    Failed(String),
}

/// Login page state, held in a signal by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub phase: LoginPhase,
}

impl LoginState {
    /// Skip the widget for a returning user. Returns where to navigate.
    pub fn resume(&mut self, session: &SessionStore) -> Option<AppRoute> {
        let identity = session.load()?;
        log::info!("login: resuming session for {}", identity.email);
        self.phase = LoginPhase::Authenticated(identity);
        Some(AppRoute::Dashboard)
    }

    /// Handle a credential from the identity provider.
    ///
    /// On success the session is already persisted when this returns, so the
    /// caller can navigate immediately.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] when the credential is missing or malformed;
    /// the flow is then `Failed` and the session cleared.
    pub fn accept_credential(&mut self, session: &SessionStore, credential: Option<&str>) -> Result<AppRoute, DecodeError> {
        self.phase = LoginPhase::Authenticating;
        match decode_credential(credential) {
            Ok(identity) => {
                session.save(&identity);
                log::info!("login: signed in as {}", identity.email);
                self.phase = LoginPhase::Authenticated(identity);
                Ok(AppRoute::Dashboard)
            }
            Err(e) => {
                log::warn!("login: credential rejected: {e}");
                self.fail(session, "Login failed. Please try again.");
                Err(e)
            }
        }
    }

    /// Enter `Failed`, rolling back any session written for this attempt.
    pub fn fail(&mut self, session: &SessionStore, message: impl Into<String>) {
        session.clear();
        self.phase = LoginPhase::Failed(message.into());
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Tell the backend about a new login. Failures are logged and returned for
/// observers, but never touch the local session.
pub async fn notify_backend<B: SummaryBackend>(backend: &B, token: &str) -> Result<(), NetworkError> {
    match backend.notify_login(token).await {
        Ok(()) => {
            log::info!("login: backend acknowledged sign-in");
            Ok(())
        }
        Err(e) => {
            log::warn!("login: backend notification failed, keeping local session: {e}");
            Err(e)
        }
    }
}

/// End the session. Returns the entry route to navigate to.
pub fn logout(session: &SessionStore) -> AppRoute {
    session.clear();
    log::info!("login: signed out");
    AppRoute::Login
}
