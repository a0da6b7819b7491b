//! Session and access errors surfaced by the auth layer.
//!
//! ERROR HANDLING
//! ==============
//! None of these are fatal. `AuthenticationFailure` becomes an inline message
//! on the login form; every other variant resolves to a redirect or a silent
//! reset to the logged-out state.

use crate::state::session::Role;

/// Failures in establishing or using the client session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Login was rejected or could not reach the API. The cause is never shown.
    #[error("Invalid credentials")]
    AuthenticationFailure,
    /// A protected route was requested without a token.
    #[error("no active session for {path}")]
    SessionMissing { path: String },
    /// The session is authenticated but its role is not allowed on the route.
    #[error("role {role} is not allowed on {path}")]
    RoleMismatch { role: Role, path: String },
    /// The persisted session record could not be read back.
    #[error("stored session is unreadable: {0}")]
    StorageCorrupt(String),
}
