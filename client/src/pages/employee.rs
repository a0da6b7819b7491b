//! Employee screens: dashboard, apply leave, own leaves, and balance.
//!
//! SYSTEM CONTEXT
//! ==============
//! These pages are mounted only after the route table granted the employee
//! role, so a missing token here means the session was cleared mid-flight;
//! the outlet is already redirecting and the fetch is skipped.

#[cfg(test)]
#[path = "employee_test.rs"]
mod employee_test;

use leptos::prelude::*;

use crate::components::leave_table::LeaveTable;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::net::types::LeaveSummary;
use crate::state::leaves::LeavesState;
use crate::util::auth::{SessionContext, api_failure_message, session_token, use_session};
use crate::util::leave_form::{LEAVE_TYPES, leave_days, validate_leave_input};

const EMPLOYEE_LINKS: [(&str, &str); 4] = [
    ("/employee", "Dashboard"),
    ("/employee/apply-leave", "Apply Leave"),
    ("/employee/my-leaves", "My Leaves"),
    ("/employee/leave-balance", "Leave Balance"),
];

fn employee_header(title: &'static str) -> impl IntoView {
    view! { <PageHeader title=title links=EMPLOYEE_LINKS.to_vec()/> }
}

#[component]
pub fn EmployeeDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            {employee_header("Employee Dashboard")}
            <div class="dashboard-page__cards">
                {EMPLOYEE_LINKS[1..]
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="dashboard-card" href=*href>
                                <span class="dashboard-card__name">{*label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ApplyLeavePage() -> impl IntoView {
    let session = use_session();
    let leave_type = RwSignal::new(LEAVE_TYPES[0].to_owned());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let day_count = move || day_count_label(&start.get(), &end.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let leave = match validate_leave_input(&leave_type.get(), &start.get(), &end.get(), &reason.get()) {
            Ok(leave) => leave,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let Some(token) = session_token(session) else {
            return;
        };
        busy.set(true);
        info.set("Submitting...".to_owned());

        leptos::task::spawn_local(async move {
            match api::apply_leave(&token, &leave).await {
                Ok(message) => {
                    start.set(String::new());
                    end.set(String::new());
                    reason.set(String::new());
                    info.set(if message.is_empty() { "Leave request submitted.".to_owned() } else { message });
                }
                Err(e) => info.set(api_failure_message(session, &e, "Could not submit leave request.")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            {employee_header("Apply Leave")}
            <form class="leave-form" on:submit=on_submit>
                <label class="leave-form__label">
                    "Leave type"
                    <select
                        class="leave-form__input"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        {LEAVE_TYPES
                            .iter()
                            .map(|kind| view! { <option value=*kind>{*kind}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="leave-form__label">
                    "From"
                    <input
                        class="leave-form__input"
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </label>
                <label class="leave-form__label">
                    "To"
                    <input
                        class="leave-form__input"
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| end.set(event_target_value(&ev))
                    />
                </label>
                <p class="leave-form__days">{day_count}</p>
                <label class="leave-form__label">
                    "Reason"
                    <textarea
                        class="leave-form__input"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="leave-form__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn MyLeavesPage() -> impl IntoView {
    let session = use_session();
    let state = RwSignal::new(loading_state());

    Effect::new(move || load_my_leaves(session, state));

    let on_cancel = Callback::new(move |id: i64| {
        let Some(token) = session_token(session) else {
            return;
        };
        if !state.try_update(|s| s.begin_action(id)).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::cancel_leave(&token, id)
                .await
                .map(|message| if message.is_empty() { "Leave cancelled.".to_owned() } else { message })
                .map_err(|e| api_failure_message(session, &e, "Could not cancel leave."));
            if state.try_update(|s| s.finish_action(result)).unwrap_or(false) {
                load_my_leaves(session, state);
            }
        });
    });

    view! {
        <div class="dashboard-page">
            {employee_header("My Leaves")}
            <LeaveTable state=state on_cancel=on_cancel/>
        </div>
    }
}

#[component]
pub fn LeaveBalancePage() -> impl IntoView {
    let session = use_session();
    let summary = RwSignal::new(None::<LeaveSummary>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(token) = session_token(session) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_leave_summary(&token).await {
                Ok(loaded) => summary.set(Some(loaded)),
                Err(e) => error.set(Some(api_failure_message(session, &e, "Could not load leave balance."))),
            }
        });
    });

    view! {
        <div class="dashboard-page">
            {employee_header("Leave Balance")}
            <Show when=move || error.get().is_some()>
                <p class="leave-table__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || summary.get().is_some()
                fallback=move || view! { <p>"Loading balance..."</p> }
            >
                <dl class="leave-summary">
                    {move || {
                        summary_rows(&summary.get().unwrap_or_default())
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                }
                            })
                            .collect_view()
                    }}
                </dl>
            </Show>
        </div>
    }
}

fn loading_state() -> LeavesState {
    let mut state = LeavesState::default();
    state.begin_load();
    state
}

fn load_my_leaves(session: SessionContext, state: RwSignal<LeavesState>) {
    let Some(token) = session_token(session) else {
        return;
    };
    state.update(LeavesState::begin_load);
    leptos::task::spawn_local(async move {
        let result = api::fetch_my_leaves(&token)
            .await
            .map_err(|e| api_failure_message(session, &e, "Could not load your leaves."));
        state.update(|s| s.finish_load(result));
    });
}

/// Live day count shown under the date pickers.
pub fn day_count_label(start: &str, end: &str) -> String {
    if start.trim().is_empty() || end.trim().is_empty() {
        return String::new();
    }
    match leave_days(start, end) {
        Some(1) => "1 day".to_owned(),
        Some(days) => format!("{days} days"),
        None => "End date cannot be before start date.".to_owned(),
    }
}

/// Label/value pairs for the balance page, in display order.
pub fn summary_rows(summary: &LeaveSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Total applied", summary.total_applied.to_string()),
        ("Approved", summary.approved.to_string()),
        ("Rejected", summary.rejected.to_string()),
        ("Pending", summary.pending.to_string()),
        ("Remaining balance", format_balance(summary.remaining_balance)),
    ]
}

/// Whole balances print without a fraction; half days keep one decimal.
pub fn format_balance(days: f64) -> String {
    if days.fract().abs() < f64::EPSILON {
        format!("{days:.0}")
    } else {
        format!("{days:.1}")
    }
}
