//! Article submission dialog.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;

/// Textarea bound to the submission draft, with submit and cancel actions.
///
/// Submit is disabled while a request is in flight; `notice` and submission
/// failures are shown under the textarea.
#[component]
pub fn SubmitModal<S, C>(
    state: RwSignal<SubmissionState>,
    notice: RwSignal<Option<String>>,
    on_submit: S,
    on_cancel: C,
) -> impl IntoView
where
    S: Fn() + 'static,
    C: Fn() + 'static,
{
    let submitting = move || state.with(SubmissionState::is_submitting);
    let message = move || notice.get().or_else(|| state.with(|s| s.failure().map(str::to_owned)));

    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h3>"Submit an Article"</h3>
                <textarea
                    class="dialog__input"
                    rows="6"
                    placeholder="Paste article content or URL here..."
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| {
                        notice.set(None);
                        state.update(|s| s.set_draft(event_target_value(&ev)));
                    }
                ></textarea>
                <Show when=move || message().is_some()>
                    <p class="dialog__error">{move || message().unwrap_or_default()}</p>
                </Show>
                <Show when=submitting>
                    <p class="dialog__status">"Summarizing..."</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_submit() disabled=submitting>
                        "Summarize"
                    </button>
                    <button class="btn" on:click=move |_| on_cancel()>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
