//! Dashboard page: profile, summary counter, suggestions, and submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. It seeds the summary counter from the
//! metrics endpoint once on mount and drives the summarization flow: the
//! request is built synchronously from the session, sent in a local task, and
//! its answer applied with `try_update` so a late response after unmount is
//! dropped instead of navigating from a dead page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::feature_card::FeatureCard;
use crate::components::profile_header::ProfileHeader;
use crate::components::submit_modal::SubmitModal;
use crate::error::SubmitError;
use crate::net::types::Identity;
use crate::routes::AppRoute;
use crate::state::login::logout;
use crate::state::session::SessionStore;
use crate::state::submission::SubmissionState;
use crate::util::suggestions;

/// What the page does after `SubmissionState::begin` rejects a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// Send the user to login, replacing history.
    Relogin,
    /// Show a message in the dialog.
    Notice(String),
    /// Nothing to do; a request is already pending.
    Ignore,
}

pub(crate) fn rejection(err: &SubmitError) -> Rejection {
    if err.requires_login() {
        Rejection::Relogin
    } else if matches!(err, SubmitError::InFlight) {
        Rejection::Ignore
    } else {
        Rejection::Notice(err.to_string())
    }
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let identity = expect_context::<Identity>();
    let session = expect_context::<SessionStore>();
    let navigate = StoredValue::new(use_navigate());

    let submission = RwSignal::new(SubmissionState::default());
    let show_modal = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let suggestion = suggestions::random();

    #[cfg(feature = "csr")]
    let (backend, results) = {
        use crate::net::api::{HttpBackend, SummaryBackend};
        use crate::state::result_cache::ResultCache;

        let backend = expect_context::<HttpBackend>();
        let metrics_backend = backend.clone();
        let email = identity.email.clone();
        leptos::task::spawn_local(async move {
            let metrics = metrics_backend.fetch_metrics(&email).await;
            submission.try_update(|s| s.seed_count(metrics));
        });
        (backend, expect_context::<ResultCache>())
    };

    let submit_session = session.clone();
    let on_submit = move || {
        let request = match submission.try_update(|s| s.begin(&submit_session)) {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                match rejection(&err) {
                    Rejection::Relogin => {
                        log::warn!("dashboard: {err}");
                        navigate.with_value(|nav| nav(AppRoute::Login.path(), replace_history()));
                    }
                    Rejection::Notice(message) => notice.set(Some(message)),
                    Rejection::Ignore => {}
                }
                return;
            }
            None => return,
        };
        notice.set(None);

        #[cfg(feature = "csr")]
        {
            use crate::net::api::SummaryBackend;
            use crate::routes::summary_href;

            let backend = backend.clone();
            let results = results.clone();
            leptos::task::spawn_local(async move {
                let response = backend.summarize(&request).await;
                match submission.try_update(|s| s.finish(request, response)) {
                    Some(Ok(result)) => {
                        show_modal.try_set(false);
                        let href = summary_href(&results.stash(result));
                        navigate.try_with_value(|nav| nav(&href, NavigateOptions::default()));
                    }
                    // Failure is rendered from the submission state.
                    Some(Err(_)) => {}
                    None => log::debug!("dashboard: dropped summarization response after unmount"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    let on_logout = move || {
        let to = logout(&session);
        navigate.with_value(|nav| nav(to.path(), replace_history()));
    };

    let count = Signal::derive(move || submission.with(SubmissionState::summary_count).to_string());

    view! {
        <div class="dashboard-page">
            <ProfileHeader
                identity=identity
                on_add=move || {
                    notice.set(None);
                    show_modal.set(true);
                }
                on_logout=on_logout
            />

            <div class="dashboard-page__grid">
                <FeatureCard
                    title="Articles Summarised"
                    desc="Track the number of articles you've read and summarized using ReadWise."
                    value=count
                    href=AppRoute::Summaries.path()
                />
                <FeatureCard
                    title="Quizzes Taken"
                    desc="Review your quiz activity and test your understanding over time."
                    value=Signal::derive(|| "0".to_owned())
                />
                <FeatureCard
                    title="Weekly Streak"
                    desc="Maintain a consistent habit with our daily summaries and get rewarded."
                    value=Signal::derive(|| "0".to_owned())
                />
                <FeatureCard
                    title="Suggested Article"
                    desc="Here's something new to read today! Click to begin your journey of learning."
                >
                    <div class="feature-card__suggestion">
                        <a href=suggestion.link target="_blank" rel="noopener noreferrer">
                            {suggestion.title}
                        </a>
                        <p>{suggestion.desc}</p>
                    </div>
                </FeatureCard>
            </div>

            <Show when=move || show_modal.get()>
                <SubmitModal
                    state=submission
                    notice=notice
                    on_submit=on_submit.clone()
                    on_cancel=move || show_modal.set(false)
                />
            </Show>
        </div>
    }
}
