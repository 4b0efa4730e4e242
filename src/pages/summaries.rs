//! Summary history list.
//!
//! Fetches the user's stored summaries once on mount. A failed fetch reads
//! as an empty history. Opening a card hands the record to the result view
//! through the result cache.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Identity, SummaryRecord};
use crate::routes::{AppRoute, summary_href};
use crate::state::history::{HistoryState, created_date, preview};
use crate::state::result_cache::ResultCache;

#[component]
pub fn SummariesPage() -> impl IntoView {
    let identity = expect_context::<Identity>();
    let results = expect_context::<ResultCache>();
    let navigate = StoredValue::new(use_navigate());
    let history = RwSignal::new(HistoryState::default());

    #[cfg(feature = "csr")]
    {
        use crate::net::api::{HttpBackend, SummaryBackend};

        let backend = expect_context::<HttpBackend>();
        let email = identity.email.clone();
        leptos::task::spawn_local(async move {
            let fetched = backend.fetch_summaries(&email).await;
            if history.try_update(|h| h.apply(fetched)).is_none() {
                log::debug!("summaries: dropped list response after unmount");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = identity;

    let go = move |path: &str| navigate.with_value(|nav| nav(path, NavigateOptions::default()));
    let open = move |record: SummaryRecord| {
        let href = summary_href(&results.stash(record.into()));
        go(&href);
    };

    view! {
        <div class="summaries-page">
            <div class="toolbar">
                <button class="btn" on:click=move |_| go(AppRoute::Dashboard.path())>"← Back to Dashboard"</button>
                <h2 class="toolbar__title">"Your Summaries"</h2>
            </div>
            {move || {
                let state = history.get();
                if state.loading {
                    view! { <p class="summaries-page__status">"Loading summaries..."</p> }.into_any()
                } else if state.is_empty() {
                    view! {
                        <div class="summaries-page__empty">
                            <p>"You haven't summarized any articles yet."</p>
                            <button class="btn btn--primary" on:click=move |_| go(AppRoute::Dashboard.path())>
                                "Create Your First Summary"
                            </button>
                        </div>
                    }.into_any()
                } else {
                    let open = open.clone();
                    view! {
                        <div class="summaries-page__grid">
                            {state.items.into_iter().map(|record| {
                                let open = open.clone();
                                let date = created_date(&record.created_at).to_owned();
                                let text = preview(&record.summary_text);
                                view! {
                                    <div class="summary-card" on:click=move |_| open(record.clone())>
                                        <div class="summary-card__date">{date}</div>
                                        <p class="summary-card__preview">{text}</p>
                                        <span class="summary-card__more">"View Details →"</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
