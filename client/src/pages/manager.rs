//! Project manager screens.

use leptos::prelude::*;

use super::approvals::{ApprovalDashboard, ApprovalQueue};
use crate::net::types::ApprovalScope;

#[component]
pub fn ManagerDashboard() -> impl IntoView {
    view! { <ApprovalDashboard scope=ApprovalScope::Manager/> }
}

#[component]
pub fn TeamApprovalsPage() -> impl IntoView {
    view! { <ApprovalQueue scope=ApprovalScope::Manager/> }
}
