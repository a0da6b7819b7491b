//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards read the session to decide between rendering, waiting, and
//! redirecting. Pages mutate it only through [`SessionStore::login`] and
//! [`SessionStore::logout`]. The app provides the store as a
//! `RwSignal<SessionStore<BrowserStorage>>` context so every mutation
//! re-evaluates the guards that read it.
//!
//! LIFECYCLE
//! =========
//! The store starts in the restoring state (`loading = true`), reads the
//! persisted record exactly once via [`SessionStore::restore`], and from then
//! on is changed only by login and logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::util::storage::{self, KeyValueStorage};

/// Storage key holding the persisted session record.
pub const SESSION_STORAGE_KEY: &str = "leavedesk_session";

/// Closed set of user roles understood by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    ProjectManager,
    Admin,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Employee, Role::ProjectManager, Role::Admin];

    /// Wire name as sent by the API and persisted in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::ProjectManager => "PROJECT_MANAGER",
            Self::Admin => "ADMIN",
        }
    }

    /// Human-readable name for headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::ProjectManager => "Project Manager",
            Self::Admin => "Admin",
        }
    }

    /// Landing route after login.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Employee => "/employee",
            Self::ProjectManager => "/manager",
            Self::Admin => "/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role string that names none of the known roles.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

/// Token and role of an authenticated session. One never exists without the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    role: Role,
}

impl Credentials {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self { token: token.into(), role }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// Read-only snapshot of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
    loading: bool,
}

impl Session {
    /// Session whose persisted copy has not been read yet.
    pub fn restoring() -> Self {
        Self { credentials: None, loading: true }
    }

    /// Logged-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, role: Role) -> Self {
        Self {
            credentials: Some(Credentials::new(token, role)),
            loading: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::token)
    }

    pub fn role(&self) -> Option<Role> {
        self.credentials.as_ref().map(Credentials::role)
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

/// On-disk layout of the persisted session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub access_token: String,
    pub role: String,
}

impl PersistedSession {
    fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            access_token: credentials.token().to_owned(),
            role: credentials.role().as_str().to_owned(),
        }
    }

    fn into_credentials(self) -> Result<Credentials, SessionError> {
        if self.access_token.trim().is_empty() {
            return Err(SessionError::StorageCorrupt("empty access token".to_owned()));
        }
        let role = self
            .role
            .parse::<Role>()
            .map_err(|e| SessionError::StorageCorrupt(e.to_string()))?;
        Ok(Credentials::new(self.access_token, role))
    }
}

/// Process-wide session holder with durable persistence.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Store that has not yet read its persisted copy.
    pub fn restoring(storage: S) -> Self {
        Self {
            storage,
            session: Session::restoring(),
        }
    }

    /// Read the persisted session once and leave the loading state.
    ///
    /// A missing record yields a logged-out session. Calling this after the
    /// store has already settled (restored, logged in, or logged out) is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StorageCorrupt`] when the record exists but is
    /// unreadable. The record is removed and the store is left logged out, so
    /// callers only need to log the error.
    pub fn restore(&mut self) -> Result<(), SessionError> {
        if !self.session.loading {
            return Ok(());
        }
        let loaded = storage::load_json::<PersistedSession>(&self.storage, SESSION_STORAGE_KEY)
            .map_err(|e| SessionError::StorageCorrupt(e.to_string()))
            .and_then(|record| record.map(PersistedSession::into_credentials).transpose());

        match loaded {
            Ok(credentials) => {
                self.session = Session { credentials, loading: false };
                Ok(())
            }
            Err(err) => {
                self.session = Session::anonymous();
                if let Err(e) = self.storage.remove_item(SESSION_STORAGE_KEY) {
                    leptos::logging::warn!("failed to clear stored session: {e}");
                }
                Err(err)
            }
        }
    }

    /// Record a successful login and persist it.
    pub fn login(&mut self, token: impl Into<String>, role: Role) {
        let credentials = Credentials::new(token, role);
        let record = PersistedSession::from_credentials(&credentials);
        if let Err(e) = storage::save_json(&self.storage, SESSION_STORAGE_KEY, &record) {
            leptos::logging::warn!("session not persisted: {e}");
        }
        self.session = Session {
            credentials: Some(credentials),
            loading: false,
        };
    }

    /// Clear the session and its persisted copy. Idempotent.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove_item(SESSION_STORAGE_KEY) {
            leptos::logging::warn!("failed to clear stored session: {e}");
        }
        self.session = Session::anonymous();
    }

    pub fn current_session(&self) -> Session {
        self.session.clone()
    }

    /// Borrow the session without cloning.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
