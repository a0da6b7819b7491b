use super::*;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

const PROTECTED: [(&str, Role); 8] = [
    ("/employee", Role::Employee),
    ("/employee/apply-leave", Role::Employee),
    ("/employee/my-leaves", Role::Employee),
    ("/employee/leave-balance", Role::Employee),
    ("/manager", Role::ProjectManager),
    ("/manager/approvals", Role::ProjectManager),
    ("/admin", Role::Admin),
    ("/admin/approvals", Role::Admin),
];

fn table() -> RouteTable {
    RouteTable::standard().unwrap()
}

fn redirect_to(to: &'static str) -> Navigation {
    Navigation::Redirect(Redirect { to, replace: true })
}

// =============================================================
// Construction
// =============================================================

#[test]
fn standard_table_has_every_documented_path() {
    let table = table();
    let paths: Vec<_> = table.routes().iter().map(RouteDescriptor::path).collect();
    for path in ["/", "/login", "/register", "/not-authorized"] {
        assert!(paths.contains(&path), "missing {path}");
    }
    for (path, _) in PROTECTED {
        assert!(paths.contains(&path), "missing {path}");
    }
    assert_eq!(paths.len(), 12);
}

#[test]
fn standard_table_gates_each_protected_path_to_one_role() {
    let table = table();
    for (path, role) in PROTECTED {
        let route = table.resolve(path).unwrap();
        assert!(route.requires_auth(), "{path} should require auth");
        assert_eq!(route.allowed_roles(), RoleSet::only(role), "{path}");
    }
}

#[test]
fn public_routes_have_no_guards() {
    let table = table();
    for path in ["/", "/login", "/register", "/not-authorized"] {
        let route = table.resolve(path).unwrap();
        assert!(!route.requires_auth());
        assert!(route.allowed_roles().is_empty());
    }
}

#[test]
fn duplicate_paths_are_rejected() {
    let result = RouteTable::new(vec![
        RouteDescriptor::public("/login", Page::Login),
        RouteDescriptor::public("/login/", Page::Register),
    ]);
    assert_eq!(result.unwrap_err(), RouteTableError::DuplicatePath("/login/"));
}

#[test]
fn relative_paths_are_rejected() {
    let result = RouteTable::new(vec![RouteDescriptor::public("login", Page::Login)]);
    assert_eq!(result.unwrap_err(), RouteTableError::InvalidPath("login"));
}

#[test]
fn empty_allow_list_is_rejected() {
    let result = RouteTable::new(vec![RouteDescriptor::role_gated(
        "/admin",
        RoleSet::EMPTY,
        Page::AdminDashboard,
    )]);
    assert_eq!(result.unwrap_err(), RouteTableError::EmptyAllowList("/admin"));
}

#[test]
fn role_guard_outside_auth_guard_is_rejected() {
    let result = RouteTable::new(vec![RouteDescriptor::with_guards(
        "/admin",
        vec![Guard::AllowRoles(RoleSet::only(Role::Admin)), Guard::Authenticated],
        RouteTarget::Page(Page::AdminDashboard),
    )]);
    assert_eq!(result.unwrap_err(), RouteTableError::RoleBeforeAuth("/admin"));
}

#[test]
fn table_without_a_role_dashboard_is_rejected() {
    let result = RouteTable::new(vec![
        RouteDescriptor::role_gated("/employee", RoleSet::only(Role::Employee), Page::EmployeeDashboard),
        RouteDescriptor::role_gated("/manager", RoleSet::only(Role::ProjectManager), Page::ManagerDashboard),
    ]);
    assert_eq!(result.unwrap_err(), RouteTableError::MissingDashboard(Role::Admin));
}

#[test]
fn dashboard_gated_to_wrong_role_is_rejected() {
    let result = RouteTable::new(vec![
        RouteDescriptor::role_gated("/employee", RoleSet::only(Role::Employee), Page::EmployeeDashboard),
        RouteDescriptor::role_gated("/manager", RoleSet::only(Role::Admin), Page::ManagerDashboard),
        RouteDescriptor::role_gated("/admin", RoleSet::only(Role::Admin), Page::AdminDashboard),
    ]);
    assert_eq!(
        result.unwrap_err(),
        RouteTableError::MissingDashboard(Role::ProjectManager)
    );
}

// =============================================================
// Path matching
// =============================================================

#[test]
fn normalize_path_strips_trailing_slash_query_and_fragment() {
    assert_eq!(normalize_path("/employee/"), "/employee");
    assert_eq!(normalize_path("/employee?tab=1"), "/employee");
    assert_eq!(normalize_path("/employee#top"), "/employee");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
}

#[test]
fn unknown_path_is_not_found() {
    let session = Session::authenticated("abc", Role::Admin);
    assert_eq!(table().navigate("/payroll", &session), Navigation::NotFound);
}

// =============================================================
// Navigation properties
// =============================================================

#[test]
fn wrong_role_always_lands_on_not_authorized() {
    let table = table();
    for (path, allowed) in PROTECTED {
        for role in Role::ALL.into_iter().filter(|r| *r != allowed) {
            let session = Session::authenticated("abc", role);
            assert_eq!(
                table.navigate(path, &session),
                redirect_to("/not-authorized"),
                "{role} on {path}"
            );
        }
    }
}

#[test]
fn missing_token_always_lands_on_login() {
    let table = table();
    for (path, _) in PROTECTED {
        assert_eq!(table.navigate(path, &Session::anonymous()), redirect_to("/login"), "{path}");
    }
}

#[test]
fn restoring_session_never_renders_or_redirects_protected_paths() {
    let table = table();
    for (path, _) in PROTECTED {
        assert_eq!(table.navigate(path, &Session::restoring()), Navigation::Loading, "{path}");
    }
}

#[test]
fn public_pages_render_while_restoring() {
    let table = table();
    assert_eq!(
        table.navigate("/login", &Session::restoring()),
        Navigation::Render(Page::Login)
    );
    assert_eq!(
        table.navigate("/register", &Session::anonymous()),
        Navigation::Render(Page::Register)
    );
}

#[test]
fn root_redirects_to_login_for_everyone() {
    let table = table();
    let expected = Navigation::Redirect(Redirect { to: "/login", replace: false });
    assert_eq!(table.navigate("/", &Session::anonymous()), expected);
    assert_eq!(table.navigate("/", &Session::authenticated("abc", Role::Admin)), expected);
}

#[test]
fn matching_role_renders_each_protected_page() {
    let table = table();
    for (path, role) in PROTECTED {
        let session = Session::authenticated("abc", role);
        assert!(
            matches!(table.navigate(path, &session), Navigation::Render(_)),
            "{path}"
        );
    }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_anonymous_admin_redirects_to_login() {
    assert_eq!(table().navigate("/admin", &Session::anonymous()), redirect_to("/login"));
}

#[test]
fn scenario_employee_on_manager_approvals_is_not_authorized() {
    let session = Session::authenticated("abc", Role::Employee);
    assert_eq!(
        table().navigate("/manager/approvals", &session),
        redirect_to("/not-authorized")
    );
}

#[test]
fn scenario_admin_opens_admin_approvals() {
    let session = Session::authenticated("abc", Role::Admin);
    assert_eq!(
        table().navigate("/admin/approvals", &session),
        Navigation::Render(Page::AllApprovals)
    );
}

#[test]
fn scenario_manager_login_then_logout() {
    let table = table();
    let mut store = SessionStore::restoring(MemoryStorage::new());
    store.restore().unwrap();

    store.login("pm-token", Role::ProjectManager);
    assert_eq!(
        table.navigate("/manager", store.session()),
        Navigation::Render(Page::ManagerDashboard)
    );

    store.logout();
    assert_eq!(table.navigate("/manager", store.session()), redirect_to("/login"));
}

#[test]
fn logout_then_protected_navigation_redirects_everywhere() {
    let table = table();
    let mut store = SessionStore::restoring(MemoryStorage::new());
    store.login("abc", Role::Admin);
    store.logout();
    for (path, _) in PROTECTED {
        assert_eq!(table.navigate(path, store.session()), redirect_to("/login"), "{path}");
    }
}

#[test]
fn reload_after_login_restores_access() {
    let table = table();
    let storage = MemoryStorage::new();
    let mut store = SessionStore::restoring(storage.clone());
    store.restore().unwrap();
    store.login("abc", Role::Employee);

    let mut reloaded = SessionStore::restoring(storage);
    assert_eq!(table.navigate("/employee", reloaded.session()), Navigation::Loading);
    reloaded.restore().unwrap();
    assert_eq!(
        table.navigate("/employee", reloaded.session()),
        Navigation::Render(Page::EmployeeDashboard)
    );
}

// =============================================================
// Denials
// =============================================================

#[test]
fn denial_explains_redirects() {
    let table = table();
    assert_eq!(
        table.denial("/admin", &Session::anonymous()),
        Some(SessionError::SessionMissing { path: "/admin".to_owned() })
    );
    assert_eq!(
        table.denial("/admin", &Session::authenticated("abc", Role::Employee)),
        Some(SessionError::RoleMismatch {
            role: Role::Employee,
            path: "/admin".to_owned(),
        })
    );
    assert_eq!(table.denial("/admin", &Session::authenticated("abc", Role::Admin)), None);
    assert_eq!(table.denial("/nowhere", &Session::anonymous()), None);
}
