//! Navigation guards evaluated before a route renders.
//!
//! DESIGN
//! ======
//! A route carries an ordered guard chain. [`evaluate`] runs it left to right
//! and stops at the first guard that does not pass, so the authorization
//! guard only ever sees sessions the authentication guard already accepted.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::error::SessionError;
use crate::state::session::{Role, Session};

pub const LOGIN_PATH: &str = "/login";
pub const NOT_AUTHORIZED_PATH: &str = "/not-authorized";

/// Small copyable set of [`Role`] values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);

    const fn bit(role: Role) -> u8 {
        match role {
            Role::Employee => 1,
            Role::ProjectManager => 1 << 1,
            Role::Admin => 1 << 2,
        }
    }

    pub const fn only(role: Role) -> Self {
        Self(Self::bit(role))
    }

    #[must_use]
    pub const fn with(self, role: Role) -> Self {
        Self(self.0 | Self::bit(role))
    }

    pub const fn contains(self, role: Role) -> bool {
        self.0 & Self::bit(role) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, RoleSet::with)
    }
}

/// One checkpoint in a route's guard chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Requires a restored session holding a token.
    Authenticated,
    /// Requires the session role to be in the set. An empty set denies everyone.
    AllowRoles(RoleSet),
}

/// Result of a single guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// The session is still being restored; nothing may render yet.
    Pending,
    Deny(Denial),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    Unauthenticated,
    WrongRole,
}

impl Guard {
    pub fn check(self, session: &Session) -> Verdict {
        if session.is_loading() {
            return Verdict::Pending;
        }
        match self {
            Self::Authenticated if session.token().is_some() => Verdict::Pass,
            Self::Authenticated => Verdict::Deny(Denial::Unauthenticated),
            Self::AllowRoles(allowed) => match session.role() {
                Some(role) if allowed.contains(role) => Verdict::Pass,
                _ => Verdict::Deny(Denial::WrongRole),
            },
        }
    }
}

/// Terminal outcome of running a guard chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Loading,
    DeniedUnauthenticated,
    DeniedWrongRole,
    Granted,
}

/// Where to send the user instead of the requested view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl Access {
    pub fn redirect(self) -> Option<Redirect> {
        match self {
            Self::DeniedUnauthenticated => Some(Redirect { to: LOGIN_PATH, replace: true }),
            Self::DeniedWrongRole => Some(Redirect { to: NOT_AUTHORIZED_PATH, replace: true }),
            Self::Loading | Self::Granted => None,
        }
    }

    /// Describe a denial for logging. `None` unless access was denied.
    pub fn denial(self, path: &str, session: &Session) -> Option<SessionError> {
        match self {
            Self::DeniedUnauthenticated => Some(SessionError::SessionMissing { path: path.to_owned() }),
            Self::DeniedWrongRole => session.role().map(|role| SessionError::RoleMismatch {
                role,
                path: path.to_owned(),
            }),
            Self::Loading | Self::Granted => None,
        }
    }
}

/// Run `guards` in order against `session`, short-circuiting on the first
/// guard that does not pass.
pub fn evaluate(guards: &[Guard], session: &Session) -> Access {
    for guard in guards {
        match guard.check(session) {
            Verdict::Pass => {}
            Verdict::Pending => return Access::Loading,
            Verdict::Deny(Denial::Unauthenticated) => return Access::DeniedUnauthenticated,
            Verdict::Deny(Denial::WrongRole) => return Access::DeniedWrongRole,
        }
    }
    Access::Granted
}
