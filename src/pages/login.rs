//! Login page hosting the Google sign-in button.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the entry route and the redirect target of the route guard. A
//! returning user with a stored session is sent straight to the dashboard.
//! A fresh credential is decoded and saved locally, the dashboard opens
//! immediately, and the backend is told about the login in the background.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::config::ClientConfig;
use crate::state::login::LoginState;
use crate::state::session::SessionStore;

pub const NOT_CONFIGURED_MESSAGE: &str = "Google sign-in is not configured for this build.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();

    let mut initial = LoginState::default();
    let resumed = initial.resume(&session);
    let login = RwSignal::new(initial);

    let button = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::net::api::HttpBackend;
        use crate::net::google::{clear_credential_handler, mount_sign_in_button};
        use crate::state::login::notify_backend;
        use crate::util::background::dispatch_background;

        let backend = expect_context::<HttpBackend>();
        let navigate = StoredValue::new(use_navigate());
        let client_id = config.google_client_id.clone();
        let widget_session = session.clone();

        let on_credential = move |credential: Option<String>| {
            let outcome = login.try_update(|s| s.accept_credential(&session, credential.as_deref()));
            let Some(Ok(target)) = outcome else {
                return;
            };
            if let Some(token) = credential {
                let backend = backend.clone();
                // Fire-and-forget; notify_backend logs failures.
                let _ = dispatch_background(async move { notify_backend(&backend, &token).await });
            }
            navigate.with_value(|nav| nav(target.path(), NavigateOptions::default()));
        };

        Effect::new(move || {
            let Some(el) = button.get() else {
                return;
            };
            if client_id.is_empty() || resumed.is_some() {
                return;
            }
            if let Err(e) = mount_sign_in_button(&el, &client_id, on_credential.clone()) {
                log::error!("login: {e}");
                login.update(|s| s.fail(&widget_session, e.to_string()));
            }
        });
        on_cleanup(clear_credential_handler);
    }

    let configured = config.sign_in_configured();

    view! {
        {resumed.map(|to| view! { <Redirect path=to.path()/> })}
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <p class="login-card__subtitle">"Sign in to your Reading Assistant account"</p>
                <div class="login-card__widget" node_ref=button></div>
                <Show when=move || !configured>
                    <p class="login-message">{NOT_CONFIGURED_MESSAGE}</p>
                </Show>
                <Show when=move || login.with(|s| s.error_message().is_some())>
                    <p class="login-message login-message--error">
                        {move || login.with(|s| s.error_message().unwrap_or_default().to_owned())}
                    </p>
                </Show>
                <p class="login-card__terms">"By signing in, you agree to our Terms and Privacy policy."</p>
            </div>
        </div>
    }
}
