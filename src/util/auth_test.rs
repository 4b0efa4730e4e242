use std::sync::Arc;

use super::*;
use crate::state::session::SESSION_KEY;
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn signed_in(name: &str, email: &str) -> (SessionStore, Identity) {
    let session = SessionStore::in_memory();
    let identity = Identity { name: name.to_owned(), email: email.to_owned(), picture: None };
    session.save(&identity);
    (session, identity)
}

#[test]
fn saved_identity_renders_dashboard() {
    let (session, identity) = signed_in("A", "a@x.com");
    assert_eq!(authorize(AppRoute::Dashboard, &session), GateDecision::Render(identity));
}

#[test]
fn missing_session_redirects_history_to_login_with_replace() {
    let session = SessionStore::in_memory();
    assert_eq!(
        authorize(AppRoute::Summaries, &session),
        GateDecision::Redirect { to: AppRoute::Login, replace: true }
    );
}

#[test]
fn every_protected_route_redirects_without_session() {
    let session = SessionStore::in_memory();
    for route in [AppRoute::Dashboard, AppRoute::Summary, AppRoute::Summaries] {
        assert!(matches!(authorize(route, &session), GateDecision::Redirect { .. }));
    }
}

#[test]
fn login_route_is_public_with_or_without_session() {
    assert_eq!(authorize(AppRoute::Login, &SessionStore::in_memory()), GateDecision::Public);
    let (session, _) = signed_in("A", "a@x.com");
    assert_eq!(authorize(AppRoute::Login, &session), GateDecision::Public);
}

#[test]
fn malformed_session_is_treated_as_unauthenticated() {
    let storage = MemoryStorage::new();
    storage.set(SESSION_KEY, r#"{"name":"A","email":"nope"}"#).unwrap();
    let session = SessionStore::new(Arc::new(storage));
    assert!(matches!(authorize(AppRoute::Dashboard, &session), GateDecision::Redirect { .. }));
}

#[test]
fn decision_is_recomputed_after_logout() {
    let (session, _) = signed_in("A", "a@x.com");
    assert!(matches!(authorize(AppRoute::Dashboard, &session), GateDecision::Render(_)));
    session.clear();
    assert!(matches!(authorize(AppRoute::Dashboard, &session), GateDecision::Redirect { .. }));
}
