//! Table of leave requests with per-row actions.
//!
//! DESIGN
//! ======
//! One table serves the employee's own list and both approval queues. Row
//! actions are opt-in callbacks; only pending rows render them, and every
//! action button is disabled while any row is waiting on the API.

#[cfg(test)]
#[path = "leave_table_test.rs"]
mod leave_table_test;

use leptos::prelude::*;

use crate::net::types::{ApprovalAction, LeaveRecord, LeaveStatus};
use crate::state::leaves::LeavesState;
use crate::util::leave_form::leave_days;

/// Render `state` as a table.
#[component]
pub fn LeaveTable(
    state: RwSignal<LeavesState>,
    #[prop(optional)] show_employee: bool,
    #[prop(optional)] show_approver: bool,
    #[prop(optional)] on_cancel: Option<Callback<i64>>,
    #[prop(optional)] on_decide: Option<Callback<(i64, ApprovalAction)>>,
) -> impl IntoView {
    let has_actions = on_cancel.is_some() || on_decide.is_some();

    view! {
        <Show when=move || state.with(|s| s.error.is_some())>
            <p class="leave-table__error">{move || state.get().error.unwrap_or_default()}</p>
        </Show>
        <Show when=move || state.with(|s| s.notice.is_some())>
            <p class="leave-table__notice">{move || state.get().notice.unwrap_or_default()}</p>
        </Show>
        <Show
            when=move || !state.with(|s| s.loading && s.items.is_empty())
            fallback=move || view! { <p>"Loading leaves..."</p> }
        >
            <Show
                when=move || state.with(|s| !s.items.is_empty())
                fallback=move || view! { <p class="leave-table__empty">"No leave requests."</p> }
            >
                <table class="leave-table">
                    <thead>
                        <tr>
                            {show_employee.then(|| view! { <th>"Employee"</th> })}
                            <th>"Type"</th>
                            <th>"From"</th>
                            <th>"To"</th>
                            <th>"Days"</th>
                            <th>"Reason"</th>
                            <th>"Status"</th>
                            {show_approver.then(|| view! { <th>"Approved by"</th> })}
                            {has_actions.then(|| view! { <th>"Actions"</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let busy = state.with(|s| s.busy_id.is_some());
                            state
                                .get()
                                .items
                                .into_iter()
                                .map(|leave| {
                                    let employee = show_employee
                                        .then(|| view! { <td>{leave.user_name.clone().unwrap_or_default()}</td> });
                                    let approver = show_approver.then(|| view! { <td>{leave.approver_label()}</td> });
                                    let actions = has_actions.then(|| {
                                        let buttons = row_actions(&leave, busy, on_cancel, on_decide);
                                        view! { <td class="leave-table__actions">{buttons}</td> }
                                    });
                                    view! {
                                        <tr class="leave-table__row">
                                            {employee}
                                            <td>{leave.leave_type.clone().unwrap_or_default()}</td>
                                            <td>{leave.start_date.clone()}</td>
                                            <td>{leave.end_date.clone()}</td>
                                            <td>{duration_label(&leave)}</td>
                                            <td>{leave.reason.clone().unwrap_or_default()}</td>
                                            <td>
                                                <span class=status_class(leave.status)>{leave.status.label()}</span>
                                            </td>
                                            {approver}
                                            {actions}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </Show>
    }
}

/// Buttons for one row. Settled leaves get none.
fn row_actions(
    leave: &LeaveRecord,
    busy: bool,
    on_cancel: Option<Callback<i64>>,
    on_decide: Option<Callback<(i64, ApprovalAction)>>,
) -> Vec<AnyView> {
    if !leave.is_pending() {
        return Vec::new();
    }
    let id = leave.id;
    let mut buttons = Vec::new();
    if let Some(cancel) = on_cancel {
        buttons.push(
            view! {
                <button class="btn" disabled=busy on:click=move |_| cancel.run(id)>
                    "Cancel"
                </button>
            }
            .into_any(),
        );
    }
    if let Some(decide) = on_decide {
        buttons.push(
            view! {
                <button class="btn btn--primary" disabled=busy on:click=move |_| decide.run((id, ApprovalAction::Approve))>
                    "Approve"
                </button>
            }
            .into_any(),
        );
        buttons.push(
            view! {
                <button class="btn btn--danger" disabled=busy on:click=move |_| decide.run((id, ApprovalAction::Reject))>
                    "Reject"
                </button>
            }
            .into_any(),
        );
    }
    buttons
}

/// "1 day", "3 days", or "-" when the stored dates do not form a range.
pub fn duration_label(leave: &LeaveRecord) -> String {
    match leave_days(&leave.start_date, &leave.end_date) {
        Some(1) => "1 day".to_owned(),
        Some(days) => format!("{days} days"),
        None => "-".to_owned(),
    }
}

pub fn status_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "status status--pending",
        LeaveStatus::Approved => "status status--approved",
        LeaveStatus::Rejected => "status status--rejected",
        LeaveStatus::Cancelled => "status status--cancelled",
    }
}
