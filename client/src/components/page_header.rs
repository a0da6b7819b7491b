//! Dashboard header with section links and logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{sign_out, use_session};

/// Header shared by every authenticated page.
#[component]
pub fn PageHeader(title: &'static str, #[prop(optional)] links: Vec<(&'static str, &'static str)>) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let role_label = move || {
        session.with(|store| store.session().role().map(|role| role.label()).unwrap_or_default())
    };
    let on_logout = move |_| sign_out(session, navigate.clone());

    view! {
        <header class="page-header toolbar">
            <span class="toolbar__title">{title}</span>
            <nav class="page-header__nav">
                {links
                    .into_iter()
                    .map(|(href, label)| view! { <A href=href attr:class="page-header__link">{label}</A> })
                    .collect_view()}
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{role_label}</span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
