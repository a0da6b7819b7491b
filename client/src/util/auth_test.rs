use super::*;
use crate::state::session::Role;
use crate::util::storage::MemoryStorage;

fn signed_in() -> (RwSignal<SessionStore<MemoryStorage>>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::restoring(storage.clone());
    store.login("tok", Role::Employee);
    (RwSignal::new(store), storage)
}

#[test]
fn session_token_reads_current_token() {
    let (session, _) = signed_in();
    assert_eq!(session_token(session), Some("tok".to_owned()));
}

#[test]
fn unauthorized_failure_signs_out() {
    let (session, storage) = signed_in();
    let message = api_failure_message(session, &ApiError::Unauthorized, "Failed to load leaves");
    assert!(message.contains("expired"));
    assert_eq!(session_token(session), None);
    assert!(storage.is_empty());
}

#[test]
fn other_failures_keep_session() {
    let (session, _) = signed_in();
    let message = api_failure_message(session, &ApiError::Network("offline".to_owned()), "Failed to load leaves");
    assert_eq!(message, "Failed to load leaves");
    assert_eq!(session_token(session), Some("tok".to_owned()));
}

#[test]
fn sign_out_clears_session_and_navigates_to_login() {
    let (session, _) = signed_in();
    let visited = std::cell::RefCell::new(Vec::new());
    sign_out(session, |path, _| visited.borrow_mut().push(path.to_owned()));
    assert_eq!(session_token(session), None);
    assert_eq!(visited.into_inner(), vec!["/login".to_owned()]);
}
