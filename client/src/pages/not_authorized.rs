//! Landing page for role denials.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::guard::LOGIN_PATH;
use crate::util::auth::use_session;

#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    let session = use_session();
    let home = move || {
        session.with(|store| match store.session().role() {
            Some(role) => (role.dashboard_path(), "Back to your dashboard"),
            None => (LOGIN_PATH, "Go to login"),
        })
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Not Authorized"</h1>
                <p class="login-card__subtitle">"Your role does not have access to that page."</p>
                {move || {
                    let (href, label) = home();
                    view! { <A href=href attr:class="login-button">{label}</A> }
                }}
            </div>
        </div>
    }
}
