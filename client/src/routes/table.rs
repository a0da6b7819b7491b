//! Declarative router table: path -> guard chain -> page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is the only place that knows which roles may open which path.
//! `RouteOutlet` asks [`RouteTable::navigate`] what to do for the current
//! location and session, and renders or redirects accordingly.
//!
//! INVARIANTS
//! ==========
//! [`RouteTable::new`] rejects duplicate paths, role guards with an empty
//! allow-list, role guards not preceded by the authentication guard, and
//! tables that leave any [`Role`] without a reachable dashboard. These are
//! startup configuration errors, never navigation-time ones.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;

use super::guard::{self, Access, Guard, LOGIN_PATH, NOT_AUTHORIZED_PATH, Redirect, RoleSet};
use crate::error::SessionError;
use crate::state::session::{Role, Session};

/// Every screen the table can route to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    NotAuthorized,
    EmployeeDashboard,
    ApplyLeave,
    MyLeaves,
    LeaveBalance,
    ManagerDashboard,
    TeamApprovals,
    AdminDashboard,
    AllApprovals,
}

/// What a matched route produces once its guards pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Page(Page),
    /// Unconditional redirect (pushes a history entry).
    Redirect(&'static str),
}

/// Static configuration for one path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    path: &'static str,
    guards: Vec<Guard>,
    target: RouteTarget,
}

impl RouteDescriptor {
    /// Reachable without a session.
    pub fn public(path: &'static str, page: Page) -> Self {
        Self {
            path,
            guards: Vec::new(),
            target: RouteTarget::Page(page),
        }
    }

    pub fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            guards: Vec::new(),
            target: RouteTarget::Redirect(to),
        }
    }

    /// Requires a session of any role.
    pub fn authenticated(path: &'static str, page: Page) -> Self {
        Self {
            path,
            guards: vec![Guard::Authenticated],
            target: RouteTarget::Page(page),
        }
    }

    /// Requires a session whose role is in `roles`.
    pub fn role_gated(path: &'static str, roles: RoleSet, page: Page) -> Self {
        Self {
            path,
            guards: vec![Guard::Authenticated, Guard::AllowRoles(roles)],
            target: RouteTarget::Page(page),
        }
    }

    /// Build a descriptor from an explicit guard chain.
    pub fn with_guards(path: &'static str, guards: Vec<Guard>, target: RouteTarget) -> Self {
        Self { path, guards, target }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    pub fn target(&self) -> RouteTarget {
        self.target
    }

    pub fn requires_auth(&self) -> bool {
        self.guards.contains(&Guard::Authenticated)
    }

    /// Union of the role allow-lists on this route. Empty means "any role".
    pub fn allowed_roles(&self) -> RoleSet {
        self.guards
            .iter()
            .filter_map(|guard| match guard {
                Guard::AllowRoles(roles) => Some(roles.iter()),
                Guard::Authenticated => None,
            })
            .flatten()
            .collect()
    }

    fn admits(&self, session: &Session) -> bool {
        guard::evaluate(&self.guards, session) == Access::Granted
    }
}

/// Route table construction failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(&'static str),
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("route {0} has a role guard with no allowed roles")]
    EmptyAllowList(&'static str),
    #[error("route {0} checks roles before authentication")]
    RoleBeforeAuth(&'static str),
    #[error("no dashboard route admits role {0}")]
    MissingDashboard(Role),
}

/// Outcome of resolving one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Session restoration is still in flight; show only a loading indicator.
    Loading,
    Render(Page),
    Redirect(Redirect),
    /// No descriptor matches the path.
    NotFound,
}

/// Validated, immutable set of route descriptors.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Validate `routes` and build the table.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteTableError`] found.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(route.path));
            }
            if !seen.insert(normalize_path(route.path)) {
                return Err(RouteTableError::DuplicatePath(route.path));
            }
            validate_guards(route)?;
        }

        let table = Self { routes };
        for role in Role::ALL {
            let probe = Session::authenticated("probe", role);
            let reachable = table
                .resolve(role.dashboard_path())
                .is_some_and(|route| route.admits(&probe));
            if !reachable {
                return Err(RouteTableError::MissingDashboard(role));
            }
        }
        Ok(table)
    }

    /// The application's route table.
    ///
    /// # Errors
    ///
    /// Only if the built-in descriptors are inconsistent.
    pub fn standard() -> Result<Self, RouteTableError> {
        let employee = RoleSet::only(Role::Employee);
        let manager = RoleSet::only(Role::ProjectManager);
        let admin = RoleSet::only(Role::Admin);

        Self::new(vec![
            RouteDescriptor::redirect("/", LOGIN_PATH),
            RouteDescriptor::public(LOGIN_PATH, Page::Login),
            RouteDescriptor::public("/register", Page::Register),
            RouteDescriptor::public(NOT_AUTHORIZED_PATH, Page::NotAuthorized),
            RouteDescriptor::role_gated("/employee", employee, Page::EmployeeDashboard),
            RouteDescriptor::role_gated("/employee/apply-leave", employee, Page::ApplyLeave),
            RouteDescriptor::role_gated("/employee/my-leaves", employee, Page::MyLeaves),
            RouteDescriptor::role_gated("/employee/leave-balance", employee, Page::LeaveBalance),
            RouteDescriptor::role_gated("/manager", manager, Page::ManagerDashboard),
            RouteDescriptor::role_gated("/manager/approvals", manager, Page::TeamApprovals),
            RouteDescriptor::role_gated("/admin", admin, Page::AdminDashboard),
            RouteDescriptor::role_gated("/admin/approvals", admin, Page::AllApprovals),
        ])
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Find the descriptor for `path`, ignoring query, fragment, and a trailing slash.
    pub fn resolve(&self, path: &str) -> Option<&RouteDescriptor> {
        let wanted = normalize_path(path);
        self.routes.iter().find(|route| normalize_path(route.path) == wanted)
    }

    /// Decide what a navigation to `path` produces for `session`.
    pub fn navigate(&self, path: &str, session: &Session) -> Navigation {
        let Some(route) = self.resolve(path) else {
            return Navigation::NotFound;
        };
        let access = guard::evaluate(&route.guards, session);
        if let Some(redirect) = access.redirect() {
            return Navigation::Redirect(redirect);
        }
        match (access, route.target) {
            (Access::Loading, _) => Navigation::Loading,
            (_, RouteTarget::Page(page)) => Navigation::Render(page),
            (_, RouteTarget::Redirect(to)) => Navigation::Redirect(Redirect { to, replace: false }),
        }
    }

    /// Why `session` is turned away from `path`, if it is.
    pub fn denial(&self, path: &str, session: &Session) -> Option<SessionError> {
        let route = self.resolve(path)?;
        guard::evaluate(&route.guards, session).denial(path, session)
    }
}

fn validate_guards(route: &RouteDescriptor) -> Result<(), RouteTableError> {
    let mut authenticated = false;
    for guard in &route.guards {
        match guard {
            Guard::Authenticated => authenticated = true,
            Guard::AllowRoles(roles) if roles.is_empty() => {
                return Err(RouteTableError::EmptyAllowList(route.path));
            }
            Guard::AllowRoles(_) if !authenticated => {
                return Err(RouteTableError::RoleBeforeAuth(route.path));
            }
            Guard::AllowRoles(_) => {}
        }
    }
    Ok(())
}

/// Strip query, fragment, and trailing slashes. The root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
