//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::net::api::HttpBackend;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, summaries::SummariesPage, summary::SummaryPage};
use crate::routes::AppRoute;
use crate::state::result_cache::ResultCache;
use crate::state::session::SessionStore;

/// Root application component.
///
/// Provides the session store, backend client, result cache, and build
/// configuration as contexts, then sets up client-side routing with every
/// route except login behind the auth gate.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(SessionStore::browser());
    provide_context(HttpBackend::new(config.api_base_url.clone()));
    provide_context(ResultCache::new());
    provide_context(config);

    view! {
        <Title text="ReadWise"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute route=AppRoute::Dashboard><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("summary")
                    view=|| view! { <ProtectedRoute route=AppRoute::Summary><SummaryPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("summaries")
                    view=|| view! { <ProtectedRoute route=AppRoute::Summaries><SummariesPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
