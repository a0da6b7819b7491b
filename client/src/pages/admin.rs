//! Admin screens. Same flow as the manager's, against `/admin/*`, with the
//! approver column shown.

use leptos::prelude::*;

use super::approvals::{ApprovalDashboard, ApprovalQueue};
use crate::net::types::ApprovalScope;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! { <ApprovalDashboard scope=ApprovalScope::Admin/> }
}

#[component]
pub fn AllApprovalsPage() -> impl IntoView {
    view! { <ApprovalQueue scope=ApprovalScope::Admin/> }
}
