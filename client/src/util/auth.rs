//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages reach the session only through these helpers so logout, token
//! lookup, and expired-token handling behave the same on every screen.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiError;
use crate::routes::guard::LOGIN_PATH;
use crate::state::session::SessionStore;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Session store as provided through Leptos context.
pub type SessionContext = RwSignal<SessionStore<BrowserStorage>>;

/// Fetch the session store from context.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Current token without subscribing the caller to session changes.
pub fn session_token<S>(session: RwSignal<SessionStore<S>>) -> Option<String>
where
    S: KeyValueStorage + Send + Sync + 'static,
{
    session.with_untracked(|store| store.session().token().map(str::to_owned))
}

/// Log out and send the user to `/login`.
pub fn sign_out<S, F>(session: RwSignal<SessionStore<S>>, navigate: F)
where
    S: KeyValueStorage + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions),
{
    session.update(SessionStore::logout);
    navigate(LOGIN_PATH, NavigateOptions::default());
}

/// Turn an API failure into an inline message. A rejected token also
/// discards the session, which makes the route guard redirect to `/login`.
pub fn api_failure_message<S>(session: RwSignal<SessionStore<S>>, err: &ApiError, fallback: &str) -> String
where
    S: KeyValueStorage + Send + Sync + 'static,
{
    if *err == ApiError::Unauthorized {
        leptos::logging::warn!("API rejected the session token; signing out");
        session.update(SessionStore::logout);
    } else {
        leptos::logging::warn!("{fallback}: {err}");
    }
    err.user_message(fallback)
}
