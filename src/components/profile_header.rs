//! Dashboard header with the signed-in user's profile and page actions.

use leptos::prelude::*;

use crate::net::types::Identity;

#[component]
pub fn ProfileHeader<A, L>(identity: Identity, on_add: A, on_logout: L) -> impl IntoView
where
    A: Fn() + 'static,
    L: Fn() + 'static,
{
    let initial = identity.initial();
    let name = identity.display_name().to_owned();
    let avatar = match identity.picture {
        Some(picture) => leptos::either::Either::Left(view! {
            <img class="profile__image" src=picture alt="Profile"/>
        }),
        None => leptos::either::Either::Right(view! {
            <div class="profile__placeholder">{initial}</div>
        }),
    };

    view! {
        <header class="profile toolbar">
            {avatar}
            <div class="profile__info">
                <div class="profile__name">{name}</div>
                <div class="profile__email">{identity.email}</div>
            </div>
            <span class="toolbar__spacer"></span>
            <button class="btn profile__add" on:click=move |_| on_add()>
                "+ Add Article"
            </button>
            <button class="btn profile__logout" on:click=move |_| on_logout() title="Logout">
                "Logout"
            </button>
        </header>
    }
}
