//! Binds the route table to the Leptos router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The outlet re-resolves whenever the location or the session changes. A
//! logout therefore redirects away from a protected page in the same
//! reactive pass, with no window in which stale content stays mounted.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::admin::{AdminDashboard, AllApprovalsPage};
use crate::pages::employee::{ApplyLeavePage, EmployeeDashboard, LeaveBalancePage, MyLeavesPage};
use crate::pages::login::LoginPage;
use crate::pages::manager::{ManagerDashboard, TeamApprovalsPage};
use crate::pages::not_authorized::NotAuthorizedPage;
use crate::pages::register::RegisterPage;
use crate::routes::table::{Navigation, Page, RouteTable};
use crate::util::auth::use_session;

/// Render whatever the route table decides for the current location.
#[component]
pub fn RouteOutlet(table: Arc<RouteTable>) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let resolver = Arc::clone(&table);
    let outcome = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|store| resolver.navigate(&path, store.session()))
    });

    Effect::new(move || {
        let Navigation::Redirect(redirect) = outcome.get() else {
            return;
        };
        let path = location.pathname.get_untracked();
        if let Some(denial) = session.with_untracked(|store| table.denial(&path, store.session())) {
            leptos::logging::log!("redirecting to {}: {denial}", redirect.to);
        }
        navigate(
            redirect.to,
            NavigateOptions {
                replace: redirect.replace,
                ..NavigateOptions::default()
            },
        );
    });

    move || match outcome.get() {
        Navigation::Loading => view! { <p class="route-loading">"Loading..."</p> }.into_any(),
        Navigation::Redirect(_) => ().into_any(),
        Navigation::NotFound => view! { <p class="route-missing">"Page not found."</p> }.into_any(),
        Navigation::Render(page) => render_page(page),
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::NotAuthorized => view! { <NotAuthorizedPage/> }.into_any(),
        Page::EmployeeDashboard => view! { <EmployeeDashboard/> }.into_any(),
        Page::ApplyLeave => view! { <ApplyLeavePage/> }.into_any(),
        Page::MyLeaves => view! { <MyLeavesPage/> }.into_any(),
        Page::LeaveBalance => view! { <LeaveBalancePage/> }.into_any(),
        Page::ManagerDashboard => view! { <ManagerDashboard/> }.into_any(),
        Page::TeamApprovals => view! { <TeamApprovalsPage/> }.into_any(),
        Page::AdminDashboard => view! { <AdminDashboard/> }.into_any(),
        Page::AllApprovals => view! { <AllApprovalsPage/> }.into_any(),
    }
}
