//! Wire DTOs for the leave-management REST API.
//!
//! DESIGN
//! ======
//! These types mirror the API's JSON bodies. Fields the API sometimes omits
//! are `Option`s with `#[serde(default)]` so a sparse row never fails a whole
//! list decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::Role;

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response. `role` is validated by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: String,
}

/// Body of `POST /users/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Approval state of a leave request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// The API emits both "Pending" and "PENDING" depending on the endpoint.
impl<'de> Deserialize<'de> for LeaveStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        [Self::Pending, Self::Approved, Self::Rejected, Self::Cancelled]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| D::Error::custom(format!("unknown leave status: {raw}")))
    }
}

/// A leave request as listed by the API. Dates are ISO `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub leave_type: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub approved_by_role: Option<String>,
}

impl LeaveRecord {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }

    /// Label for the approver column; unknown role strings are shown verbatim.
    pub fn approver_label(&self) -> String {
        match self.approved_by_role.as_deref() {
            None | Some("") => "-".to_owned(),
            Some(raw) => raw
                .parse::<Role>()
                .map_or_else(|_| raw.to_owned(), |role| role.label().to_owned()),
        }
    }
}

/// Body of `POST /leave/apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewLeave {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `GET /dashboard/summary` counters for the current user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveSummary {
    #[serde(default)]
    pub total_applied: u32,
    #[serde(default)]
    pub approved: u32,
    #[serde(default)]
    pub rejected: u32,
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub remaining_balance: f64,
}

/// Approver tier; selects the `/manager` or `/admin` endpoint family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalScope {
    Manager,
    Admin,
}

impl ApprovalScope {
    /// The scope a role approves in, if it approves at all.
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::ProjectManager => Some(Self::Manager),
            Role::Admin => Some(Self::Admin),
            Role::Employee => None,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Manager => "Team Leave Approvals",
            Self::Admin => "All Leave Approvals",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ApprovalAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

/// Generic `{"message": ...}` acknowledgement body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// FastAPI-style error body: `{"detail": ...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "deserialize_detail")]
    pub detail: Option<String>,
}

// `detail` is a string for handled errors and a list of objects for
// validation errors; only the string form is surfaced to users.
fn deserialize_detail<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
