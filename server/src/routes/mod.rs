//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the client: `/pkg` serves the WASM bundle and CSS
//! built by `cargo leptos`, `/healthz` answers probes, and every other path is
//! rendered by Leptos SSR. Access control happens in the rendered app's route
//! table, so the server never inspects a session.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::ServerError;

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    // The route table lives in the app, so every non-asset path goes to SSR.
    let render = leptos_axum::render_app_to_stream({
        let opts = leptos_options.clone();
        move || leavedesk_client::app::shell(opts.clone())
    });

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(render)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
