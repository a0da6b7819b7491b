//! Approval queue screens shared by the manager and admin sections.
//!
//! DESIGN
//! ======
//! Both tiers run the same flow against a different endpoint prefix, so the
//! screens take an [`ApprovalScope`] instead of being duplicated. After each
//! successful decision the queue reloads from the API rather than patching
//! rows locally; a refused decision leaves the list and its error in place.

#[cfg(test)]
#[path = "approvals_test.rs"]
mod approvals_test;

use leptos::prelude::*;

use crate::components::leave_table::LeaveTable;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::net::types::{ApprovalAction, ApprovalScope};
use crate::state::leaves::LeavesState;
use crate::util::auth::{SessionContext, api_failure_message, session_token, use_session};

/// Dashboard and approvals paths for `scope`.
pub fn scope_links(scope: ApprovalScope) -> Vec<(&'static str, &'static str)> {
    match scope {
        ApprovalScope::Manager => vec![("/manager", "Dashboard"), ("/manager/approvals", "Team Approvals")],
        ApprovalScope::Admin => vec![("/admin", "Dashboard"), ("/admin/approvals", "All Approvals")],
    }
}

fn dashboard_title(scope: ApprovalScope) -> &'static str {
    match scope {
        ApprovalScope::Manager => "Manager Dashboard",
        ApprovalScope::Admin => "Admin Dashboard",
    }
}

/// Landing page: how many requests are waiting, and a link to the queue.
#[component]
pub fn ApprovalDashboard(scope: ApprovalScope) -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(LeavesState::default());
    state.update(LeavesState::begin_load);

    Effect::new(move || load_queue(session, state, scope));

    let links = scope_links(scope);
    let queue_href = links[1].0;

    view! {
        <div class="dashboard-page">
            <PageHeader title=dashboard_title(scope) links=links/>
            <div class="dashboard-page__cards">
                <a class="dashboard-card" href=queue_href>
                    <span class="dashboard-card__name">{scope.title()}</span>
                    <span class="dashboard-card__count">
                        {move || pending_label(state.with(|s| (s.loading, s.pending_count())))}
                    </span>
                </a>
            </div>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="leave-table__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Queue page with approve/reject on pending rows.
#[component]
pub fn ApprovalQueue(scope: ApprovalScope) -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(LeavesState::default());
    state.update(LeavesState::begin_load);

    Effect::new(move || load_queue(session, state, scope));

    let on_decide = Callback::new(move |(id, action): (i64, ApprovalAction)| {
        let Some(token) = session_token(session) else {
            return;
        };
        if !state.try_update(|s| s.begin_action(id)).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::decide_leave(&token, scope, id, action)
                .await
                .map(|message| decision_notice(action, message))
                .map_err(|e| api_failure_message(session, &e, "Could not update leave."));
            if state.try_update(|s| s.finish_action(result)).unwrap_or(false) {
                load_queue(session, state, scope);
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <PageHeader title=scope.title() links=scope_links(scope)/>
            <LeaveTable
                state=state
                show_employee=true
                show_approver={scope == ApprovalScope::Admin}
                on_decide=on_decide
            />
        </div>
    }
}

fn load_queue(session: SessionContext, state: RwSignal<LeavesState>, scope: ApprovalScope) {
    let Some(token) = session_token(session) else {
        return;
    };
    state.update(LeavesState::begin_load);
    leptos::task::spawn_local(async move {
        let result = api::fetch_approval_queue(&token, scope)
            .await
            .map_err(|e| api_failure_message(session, &e, "Could not load leave requests."));
        state.update(|s| s.finish_load(result));
    });
}

/// API acknowledgement, or a default when the body carried none.
pub fn decision_notice(action: ApprovalAction, message: String) -> String {
    if !message.trim().is_empty() {
        return message;
    }
    match action {
        ApprovalAction::Approve => "Leave approved.".to_owned(),
        ApprovalAction::Reject => "Leave rejected.".to_owned(),
    }
}

pub fn pending_label((loading, pending): (bool, usize)) -> String {
    match (loading, pending) {
        (true, 0) => "Loading...".to_owned(),
        (_, 1) => "1 request pending".to_owned(),
        (_, n) => format!("{n} requests pending"),
    }
}
