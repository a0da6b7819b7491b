use super::*;
use crate::util::storage::{MemoryStorage, load_json};

fn restored(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::restoring(storage.clone());
    store.restore().unwrap();
    store
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_to_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"EMPLOYEE\"");
    assert_eq!(serde_json::to_string(&Role::ProjectManager).unwrap(), "\"PROJECT_MANAGER\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
}

#[test]
fn role_parses_wire_names_for_every_variant() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn role_parse_is_case_insensitive_and_trimmed() {
    assert_eq!(" admin ".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("project_manager".parse::<Role>(), Ok(Role::ProjectManager));
}

#[test]
fn role_parse_rejects_unknown_names() {
    assert_eq!("MANAGER".parse::<Role>(), Err(UnknownRole("MANAGER".to_owned())));
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_dashboards_are_distinct() {
    assert_eq!(Role::Employee.dashboard_path(), "/employee");
    assert_eq!(Role::ProjectManager.dashboard_path(), "/manager");
    assert_eq!(Role::Admin.dashboard_path(), "/admin");
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_anonymous_and_settled() {
    let session = Session::default();
    assert!(!session.is_loading());
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.role(), None);
}

#[test]
fn session_restoring_is_loading_without_credentials() {
    let session = Session::restoring();
    assert!(session.is_loading());
    assert_eq!(session.token(), None);
}

#[test]
fn session_authenticated_carries_token_and_role() {
    let session = Session::authenticated("abc", Role::Admin);
    assert_eq!(session.token(), Some("abc"));
    assert_eq!(session.role(), Some(Role::Admin));
    assert!(!session.is_loading());
}

// =============================================================
// SessionStore: restore
// =============================================================

#[test]
fn store_starts_loading_until_restored() {
    let store = SessionStore::restoring(MemoryStorage::new());
    assert!(store.current_session().is_loading());
}

#[test]
fn restore_with_empty_storage_is_logged_out() {
    let store = restored(&MemoryStorage::new());
    assert_eq!(store.current_session(), Session::anonymous());
}

#[test]
fn login_then_reload_restores_same_session() {
    let storage = MemoryStorage::new();
    let mut store = restored(&storage);
    store.login("tok-1", Role::ProjectManager);

    let reloaded = restored(&storage);
    assert_eq!(reloaded.current_session(), Session::authenticated("tok-1", Role::ProjectManager));
}

#[test]
fn restore_reads_persisted_record_layout() {
    let storage = MemoryStorage::new();
    storage
        .set_item(SESSION_STORAGE_KEY, r#"{"access_token":"abc","role":"EMPLOYEE"}"#)
        .unwrap();
    let store = restored(&storage);
    assert_eq!(store.current_session().token(), Some("abc"));
    assert_eq!(store.current_session().role(), Some(Role::Employee));
}

#[test]
fn restore_malformed_json_resets_and_clears_record() {
    let storage = MemoryStorage::new();
    storage.set_item(SESSION_STORAGE_KEY, "{oops").unwrap();
    let mut store = SessionStore::restoring(storage.clone());

    assert!(matches!(store.restore(), Err(SessionError::StorageCorrupt(_))));
    assert_eq!(store.current_session(), Session::anonymous());
    assert_eq!(storage.get_item(SESSION_STORAGE_KEY).unwrap(), None);
}

#[test]
fn restore_unknown_role_is_storage_corrupt() {
    let storage = MemoryStorage::new();
    storage
        .set_item(SESSION_STORAGE_KEY, r#"{"access_token":"abc","role":"SUPERUSER"}"#)
        .unwrap();
    let mut store = SessionStore::restoring(storage.clone());

    assert!(matches!(store.restore(), Err(SessionError::StorageCorrupt(_))));
    assert!(!store.current_session().is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn restore_empty_token_is_storage_corrupt() {
    let storage = MemoryStorage::new();
    storage
        .set_item(SESSION_STORAGE_KEY, r#"{"access_token":"  ","role":"ADMIN"}"#)
        .unwrap();
    let mut store = SessionStore::restoring(storage);
    assert!(matches!(store.restore(), Err(SessionError::StorageCorrupt(_))));
    assert!(!store.current_session().is_loading());
}

#[test]
fn restore_runs_only_once() {
    let storage = MemoryStorage::new();
    let mut store = restored(&storage);
    storage
        .set_item(SESSION_STORAGE_KEY, r#"{"access_token":"late","role":"ADMIN"}"#)
        .unwrap();
    store.restore().unwrap();
    assert!(!store.current_session().is_authenticated());
}

#[test]
fn restore_after_login_keeps_login() {
    let mut store = SessionStore::restoring(MemoryStorage::new());
    store.login("fresh", Role::Employee);
    store.restore().unwrap();
    assert_eq!(store.current_session().token(), Some("fresh"));
}

// =============================================================
// SessionStore: login / logout
// =============================================================

#[test]
fn login_persists_wire_record() {
    let storage = MemoryStorage::new();
    let mut store = restored(&storage);
    store.login("abc", Role::Admin);

    let record = load_json::<PersistedSession>(&storage, SESSION_STORAGE_KEY).unwrap();
    assert_eq!(
        record,
        Some(PersistedSession {
            access_token: "abc".to_owned(),
            role: "ADMIN".to_owned(),
        })
    );
}

#[test]
fn logout_clears_session_and_storage() {
    let storage = MemoryStorage::new();
    let mut store = restored(&storage);
    store.login("abc", Role::Employee);
    store.logout();

    assert_eq!(store.current_session(), Session::anonymous());
    assert!(storage.is_empty());
}

#[test]
fn logout_twice_matches_logout_once() {
    let storage = MemoryStorage::new();
    let mut once = restored(&storage);
    once.login("abc", Role::Employee);
    once.logout();
    let after_once = once.current_session();

    once.logout();
    assert_eq!(once.current_session(), after_once);
    assert!(storage.is_empty());
}

#[test]
fn logout_when_logged_out_is_noop() {
    let mut store = restored(&MemoryStorage::new());
    store.logout();
    assert_eq!(store.current_session(), Session::anonymous());
}

#[test]
fn login_replaces_previous_session() {
    let storage = MemoryStorage::new();
    let mut store = restored(&storage);
    store.login("first", Role::Employee);
    store.login("second", Role::Admin);

    assert_eq!(store.current_session(), Session::authenticated("second", Role::Admin));
    assert_eq!(restored(&storage).current_session().token(), Some("second"));
}
