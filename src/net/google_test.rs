use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<Option<String>>>>, impl Fn(Option<String>) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |credential| sink.borrow_mut().push(credential))
}

#[test]
fn credential_without_handler_is_dropped() {
    clear_credential_handler();
    assert!(!dispatch_credential(Some("jwt".to_owned())));
}

#[test]
fn registered_handler_receives_credentials() {
    let (seen, handler) = recorder();
    set_credential_handler(handler);
    assert!(dispatch_credential(Some("jwt".to_owned())));
    assert!(dispatch_credential(None));
    assert_eq!(*seen.borrow(), vec![Some("jwt".to_owned()), None]);
}

#[test]
fn remount_replaces_previous_handler() {
    let (first, old) = recorder();
    let (second, new) = recorder();
    set_credential_handler(old);
    set_credential_handler(new);
    dispatch_credential(Some("jwt".to_owned()));
    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn cleared_handler_is_released() {
    let (seen, handler) = recorder();
    set_credential_handler(handler);
    clear_credential_handler();
    assert!(!dispatch_credential(Some("jwt".to_owned())));
    assert!(seen.borrow().is_empty());
    assert_eq!(Rc::strong_count(&seen), 1);
}

#[test]
fn handler_may_clear_itself_while_running() {
    set_credential_handler(|_| clear_credential_handler());
    assert!(dispatch_credential(None));
    assert!(!dispatch_credential(None));
}

#[test]
fn initialization_is_claimed_once() {
    assert!(claim_initialization());
    assert!(!claim_initialization());
    assert!(!claim_initialization());
}
