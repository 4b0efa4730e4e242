//! Result view for a single summary.
//!
//! The result arrives through the in-memory result cache under the `token`
//! query parameter. Without it (direct visit, reload, reused token) the page
//! shows an empty state and returns to the dashboard after a fixed delay.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::SummaryResult;
use crate::routes::{AppRoute, RESULT_TOKEN_PARAM};
use crate::state::result_cache::ResultCache;

pub const EMPTY_RESULT_REDIRECT_DELAY: Duration = Duration::from_millis(3000);
pub const EMPTY_RESULT_MESSAGE: &str = "No data to display. Redirecting to dashboard...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultView {
    Show(SummaryResult),
    Empty { redirect_after: Duration },
}

pub fn result_view(result: Option<SummaryResult>) -> ResultView {
    match result {
        Some(result) => ResultView::Show(result),
        None => ResultView::Empty { redirect_after: EMPTY_RESULT_REDIRECT_DELAY },
    }
}

/// Wait for `delay`, then report whether the page is still mounted and the
/// redirect should happen.
pub async fn redirect_when_alive(delay: impl Future<Output = ()>, alive: &AtomicBool) -> bool {
    delay.await;
    alive.load(Ordering::Relaxed)
}

#[component]
pub fn SummaryPage() -> impl IntoView {
    let results = expect_context::<ResultCache>();
    let navigate = StoredValue::new(use_navigate());

    let token = use_query_map().with_untracked(|q| q.get(RESULT_TOKEN_PARAM));
    let view_state = result_view(token.and_then(|t| results.take(&t)));

    let back = move || navigate.with_value(|nav| nav(AppRoute::Dashboard.path(), NavigateOptions::default()));

    match view_state {
        ResultView::Show(result) => Either::Left(view! {
            <div class="summary-page">
                <div class="toolbar">
                    <button class="btn" on:click=move |_| back()>"← Back to Dashboard"</button>
                </div>
                <section class="summary-page__section">
                    <h2>"Summary"</h2>
                    <p class="summary-page__summary">{result.summary}</p>
                </section>
                <section class="summary-page__section">
                    <h3>"Original Content"</h3>
                    <p class="summary-page__original">{result.original}</p>
                </section>
            </div>
        }),
        ResultView::Empty { redirect_after } => {
            log::info!("summary: no result to show, returning to dashboard in {redirect_after:?}");

            #[cfg(feature = "csr")]
            {
                use std::sync::Arc;

                let alive = Arc::new(AtomicBool::new(true));
                let alive_task = alive.clone();
                leptos::task::spawn_local(async move {
                    let delay = gloo_timers::future::sleep(redirect_after);
                    if redirect_when_alive(delay, &alive_task).await {
                        navigate.try_with_value(|nav| nav(AppRoute::Dashboard.path(), NavigateOptions::default()));
                    }
                });
                on_cleanup(move || alive.store(false, Ordering::Relaxed));
            }

            Either::Right(view! {
                <div class="summary-page summary-page--empty">
                    <p>{EMPTY_RESULT_MESSAGE}</p>
                    <button class="btn" on:click=move |_| back()>"Back to Dashboard"</button>
                </div>
            })
        }
    }
}
