//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store starts in its restoring state on both server and client
//! so SSR output and the first hydrated render agree (protected paths show
//! "Loading..."). Restoration from localStorage runs in an effect, which only
//! fires in the browser after hydration.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::route_outlet::RouteOutlet;
use crate::error::SessionError;
use crate::routes::table::RouteTable;
use crate::state::session::SessionStore;
use crate::util::auth::SessionContext;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SessionContext = RwSignal::new(SessionStore::restoring(BrowserStorage));
    provide_context(session);

    Effect::new(move || {
        let mut outcome = Ok(());
        session.update(|store| outcome = store.restore());
        match outcome {
            Ok(()) => {}
            Err(SessionError::StorageCorrupt(reason)) => {
                leptos::logging::warn!("discarded stored session: {reason}");
            }
            Err(e) => leptos::logging::warn!("session restore failed: {e}"),
        }
    });

    let table = match RouteTable::standard() {
        Ok(table) => Some(Arc::new(table)),
        Err(e) => {
            leptos::logging::error!("route table rejected: {e}");
            None
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/leavedesk.css"/>
        <Title text="LeaveDesk"/>

        <Router>
            {match table {
                Some(table) => view! { <RouteOutlet table=table/> }.into_any(),
                None => view! { <p class="route-missing">"Routing is misconfigured."</p> }.into_any(),
            }}
        </Router>
    }
}
