//! Route wrapper that applies the auth gate before rendering its children.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::auth::{GateDecision, authorize};

/// Renders `children` only when the session allows `route`.
///
/// On success the session [`Identity`](crate::net::types::Identity) is
/// provided as context for the page. Otherwise nothing of the page is built
/// and the router replaces the current entry with the login route, so Back
/// does not return to the protected path.
#[component]
pub fn ProtectedRoute(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    match authorize(route, &session) {
        GateDecision::Render(identity) => {
            provide_context(identity);
            Either::Left(children())
        }
        GateDecision::Public => Either::Left(children()),
        GateDecision::Redirect { to, replace } => Either::Right(view! {
            <Redirect path=to.path() options=NavigateOptions { replace, ..Default::default() }/>
        }),
    }
}
