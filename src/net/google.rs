//! Google Identity Services bindings for the sign-in button.
//!
//! The GSI script (`https://accounts.google.com/gsi/client`) is loaded by
//! `index.html` before the WASM bundle. Every call goes through `catch` so a
//! blocked or missing script turns into a [`WidgetError`] instead of a panic.
//!
//! GSI is initialized once per page load with a single callback that forwards
//! to whichever handler the mounted login page registered. Remounting the page
//! swaps the handler and re-renders the button only.

#[cfg(test)]
#[path = "google_test.rs"]
mod google_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Options passed to `google.accounts.id.renderButton`.
pub const BUTTON_OPTIONS: &str = r#"{"type":"standard","theme":"outline","size":"large","text":"signin_with"}"#;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("Google sign-in is unavailable: {0}")]
    ScriptUnavailable(String),
}

type CredentialHandler = Rc<dyn Fn(Option<String>)>;

thread_local! {
    static CREDENTIAL_HANDLER: RefCell<Option<CredentialHandler>> = const { RefCell::new(None) };
    #[cfg(any(test, feature = "csr"))]
    static INITIALIZED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// Route future GSI responses to `handler`, replacing any previous one.
pub fn set_credential_handler(handler: impl Fn(Option<String>) + 'static) {
    CREDENTIAL_HANDLER.with(|slot| *slot.borrow_mut() = Some(Rc::new(handler)));
}

/// Drop the registered handler; later responses are ignored.
pub fn clear_credential_handler() {
    CREDENTIAL_HANDLER.with(|slot| slot.borrow_mut().take());
}

/// Forward a GSI response to the registered handler. Returns whether one ran.
pub fn dispatch_credential(credential: Option<String>) -> bool {
    // Released before the call: the handler may navigate and unmount the page.
    let handler = CREDENTIAL_HANDLER.with(|slot| slot.borrow().clone());
    match handler {
        Some(handler) => {
            handler(credential);
            true
        }
        None => {
            log::debug!("google: credential arrived with no login page mounted");
            false
        }
    }
}

/// True exactly once per page load: the caller must initialize GSI.
#[cfg(any(test, feature = "csr"))]
fn claim_initialization() -> bool {
    INITIALIZED.with(|done| !done.replace(true))
}

/// Give back an unfinished claim so the next mount retries.
#[cfg(feature = "csr")]
fn release_initialization() {
    INITIALIZED.with(|done| done.set(false));
}

#[cfg(feature = "csr")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = initialize)]
        pub fn initialize(config: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
        pub fn render_button(parent: &web_sys::HtmlElement, options: &JsValue) -> Result<(), JsValue>;
    }
}

#[cfg(feature = "csr")]
fn widget_error(e: &wasm_bindgen::JsValue) -> WidgetError {
    WidgetError::ScriptUnavailable(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

/// Render the GSI button into `parent`, initializing GSI with `client_id` on
/// the first call of the page load.
///
/// `on_credential` becomes the registered handler: it runs for every sign-in
/// attempt with the `credential` field of the GSI response, or `None` when the
/// response carried none.
///
/// # Errors
///
/// Returns [`WidgetError`] when the GSI script is not loaded or rejects the call.
#[cfg(feature = "csr")]
pub fn mount_sign_in_button<F>(parent: &web_sys::HtmlElement, client_id: &str, on_credential: F) -> Result<(), WidgetError>
where
    F: Fn(Option<String>) + 'static,
{
    set_credential_handler(on_credential);
    if claim_initialization() {
        if let Err(e) = initialize(client_id) {
            release_initialization();
            return Err(e);
        }
    }
    let options = js_sys::JSON::parse(BUTTON_OPTIONS).map_err(|e| widget_error(&e))?;
    ffi::render_button(parent, &options).map_err(|e| widget_error(&e))
}

#[cfg(feature = "csr")]
fn initialize(client_id: &str) -> Result<(), WidgetError> {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn Fn(JsValue)>::new(|response: JsValue| {
        let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
            .ok()
            .and_then(|v| v.as_string());
        dispatch_credential(credential);
    });

    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &JsValue::from_str("client_id"), &JsValue::from_str(client_id))
        .map_err(|e| widget_error(&e))?;
    js_sys::Reflect::set(&config, &JsValue::from_str("callback"), callback.as_ref())
        .map_err(|e| widget_error(&e))?;

    ffi::initialize(&config).map_err(|e| widget_error(&e))?;
    // One callback for the page load; GSI holds it from here on.
    callback.forget();
    Ok(())
}
