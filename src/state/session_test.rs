use super::*;

fn identity(name: &str, email: &str) -> Identity {
    Identity { name: name.to_owned(), email: email.to_owned(), picture: None }
}

fn store_with_raw(raw: &str) -> SessionStore {
    let storage = MemoryStorage::new();
    storage.set(SESSION_KEY, raw).unwrap();
    SessionStore::new(Arc::new(storage))
}

// =============================================================
// save / load
// =============================================================

#[test]
fn empty_store_loads_nothing() {
    let session = SessionStore::in_memory();
    assert_eq!(session.load(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn save_then_load_round_trips_identity() {
    let session = SessionStore::in_memory();
    let ada = Identity {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        picture: Some("https://example.com/ada.png".to_owned()),
    };
    session.save(&ada);
    assert_eq!(session.load(), Some(ada));
}

#[test]
fn save_overwrites_previous_identity() {
    let session = SessionStore::in_memory();
    session.save(&identity("A", "a@x.com"));
    session.save(&identity("B", "b@x.com"));
    assert_eq!(session.load(), Some(identity("B", "b@x.com")));
}

#[test]
fn clones_share_storage() {
    let session = SessionStore::in_memory();
    let other = session.clone();
    session.save(&identity("A", "a@x.com"));
    assert!(other.is_authenticated());
    other.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn session_is_stored_as_json_under_user_key() {
    let storage = Arc::new(MemoryStorage::new());
    let session = SessionStore::new(storage.clone());
    session.save(&identity("A", "a@x.com"));
    let raw = storage.get("user").unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["email"], "a@x.com");
}

// =============================================================
// malformed data
// =============================================================

#[test]
fn unparseable_stored_value_reads_as_absent() {
    assert_eq!(store_with_raw("{not json").load(), None);
}

#[test]
fn structurally_invalid_identity_reads_as_absent() {
    assert_eq!(store_with_raw(r#"{"name":"A","email":""}"#).load(), None);
    assert_eq!(store_with_raw(r#"{"name":"A"}"#).load(), None);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_then_load_is_absent() {
    let session = SessionStore::in_memory();
    session.save(&identity("A", "a@x.com"));
    session.clear();
    assert_eq!(session.load(), None);
}

#[test]
fn clear_is_idempotent() {
    let session = SessionStore::in_memory();
    session.clear();
    session.clear();
    assert_eq!(session.load(), None);
}

#[test]
fn clear_removes_malformed_data() {
    let session = store_with_raw("garbage");
    session.clear();
    assert_eq!(session.load(), None);
}

// =============================================================
// degraded storage
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn unavailable_storage_never_persists_and_never_panics() {
    let session = SessionStore::browser();
    session.save(&identity("A", "a@x.com"));
    assert_eq!(session.load(), None);
    session.clear();
}
