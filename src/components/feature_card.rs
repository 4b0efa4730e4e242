//! Dashboard feature card.

use leptos::prelude::*;
use leptos_router::components::A;

/// A titled card with an optional live value, optional link target, and
/// optional extra content below the description.
#[component]
pub fn FeatureCard(
    #[prop(into)] title: String,
    #[prop(into)] desc: String,
    #[prop(optional, into)] value: Option<Signal<String>>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let body = view! {
        <h4 class="feature-card__title">{title}</h4>
        <p class="feature-card__desc">{desc}</p>
        {value.map(|value| view! { <div class="feature-card__value">{move || value.get()}</div> })}
    };

    view! {
        <div class="feature-card">
            {match href {
                Some(href) => leptos::either::Either::Left(view! {
                    <A href=href attr:class="feature-card__link">{body}</A>
                }),
                None => leptos::either::Either::Right(body),
            }}
            {children.map(|children| children())}
        </div>
    }
}
