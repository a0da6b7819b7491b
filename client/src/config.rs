//! Build-time client configuration.
//!
//! The API origin is baked in at compile time from `LEAVEDESK_API_URL` so the
//! WASM bundle needs no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API origin used when `LEAVEDESK_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Resolved API origin.
pub fn api_base_url() -> &'static str {
    match option_env!("LEAVEDESK_API_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Join `base` and `path` with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Absolute URL for an API `path` such as `/auth/login`.
pub fn api_url(path: &str) -> String {
    join_url(api_base_url(), path)
}
