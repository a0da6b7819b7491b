//! REST API helpers for the leave-management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. HTTP 401 maps to
//! [`ApiError::Unauthorized`], which pages treat as an expired session.
//! Login collapses every failure into [`SessionError::AuthenticationFailure`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApprovalAction, ApprovalScope, LeaveRecord, LeaveSummary, NewLeave, RegisterRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ApiErrorBody, LoginResponse};
use crate::error::SessionError;
use crate::state::session::Role;

/// Failure of an authenticated or anonymous API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The token was rejected; the session must be discarded.
    #[error("session expired")]
    Unauthorized,
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for an inline error line. The API's `detail` wins
    /// when present, otherwise `fallback` is used.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            Self::Status { detail: Some(detail), .. } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: Option<ApiErrorBody>) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    ApiError::Status {
        status,
        detail: body.and_then(|b| b.detail),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_credentials(body: LoginResponse) -> Result<(String, Role), SessionError> {
    if body.access_token.trim().is_empty() {
        return Err(SessionError::AuthenticationFailure);
    }
    let role = body
        .role
        .parse::<Role>()
        .map_err(|_| SessionError::AuthenticationFailure)?;
    Ok((body.access_token, role))
}

#[cfg(any(test, feature = "hydrate"))]
fn cancel_endpoint(leave_id: i64) -> String {
    format!("/leave/cancel/{leave_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn approval_queue_endpoint(scope: ApprovalScope) -> String {
    format!("/{}/leaves", scope.prefix())
}

#[cfg(any(test, feature = "hydrate"))]
fn decision_endpoint(scope: ApprovalScope, leave_id: i64, action: ApprovalAction) -> String {
    format!("/{}/leave/{leave_id}/{}", scope.prefix(), action.as_str())
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer, status_error};
    use crate::net::types::{ApiErrorBody, ApiMessage};

    pub(super) fn get(path: &str, token: &str) -> RequestBuilder {
        Request::get(&crate::config::api_url(path)).header("Authorization", &bearer(token))
    }

    pub(super) fn put(path: &str, token: &str) -> RequestBuilder {
        Request::put(&crate::config::api_url(path)).header("Authorization", &bearer(token))
    }

    pub(super) fn post(path: &str) -> RequestBuilder {
        Request::post(&crate::config::api_url(path))
    }

    pub(super) async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let resp = request
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let body = resp.json::<ApiErrorBody>().await.ok();
        Err(status_error(resp.status(), body))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Acknowledgement text; an undecodable body still counts as success.
    pub(super) async fn message(resp: Response) -> String {
        resp.json::<ApiMessage>().await.map(|m| m.message).unwrap_or_default()
    }
}

/// Exchange credentials for a token and role via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`SessionError::AuthenticationFailure`] for every failure: bad
/// credentials, network errors, and responses with an empty token or unknown role.
pub async fn login(email: &str, password: &str) -> Result<(String, Role), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = http::send(http::post("/auth/login").json(&payload)).await.map_err(|e| {
            leptos::logging::warn!("login failed: {e}");
            SessionError::AuthenticationFailure
        })?;
        let body: LoginResponse = http::decode(resp).await.map_err(|e| {
            leptos::logging::warn!("login response rejected: {e}");
            SessionError::AuthenticationFailure
        })?;
        login_credentials(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(SessionError::AuthenticationFailure)
    }
}

/// Create an account via `POST /users/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the registration.
pub async fn register(request: &RegisterRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::post("/users/register").json(request)).await?;
        Ok(http::message(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Submit a leave request via `POST /leave/apply`.
///
/// # Errors
///
/// Returns an error if the request fails or the API rejects the leave.
pub async fn apply_leave(token: &str, leave: &NewLeave) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = http::post("/leave/apply")
            .header("Authorization", &bearer(token))
            .json(leave);
        let resp = http::send(request).await?;
        Ok(http::message(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, leave);
        Err(ApiError::Unavailable)
    }
}

/// List the caller's own leave requests via `GET /leave/my-leaves`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_my_leaves(token: &str) -> Result<Vec<LeaveRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get("/leave/my-leaves", token).build()).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Withdraw a pending leave via `PUT /leave/cancel/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the leave is no longer pending.
pub async fn cancel_leave(token: &str, leave_id: i64) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::put(&cancel_endpoint(leave_id), token).build()).await?;
        Ok(http::message(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, leave_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the caller's leave counters via `GET /dashboard/summary`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_leave_summary(token: &str) -> Result<LeaveSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get("/dashboard/summary", token).build()).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// List leaves awaiting a decision in `scope` via `GET /{manager|admin}/leaves`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_approval_queue(token: &str, scope: ApprovalScope) -> Result<Vec<LeaveRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get(&approval_queue_endpoint(scope), token).build()).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, scope);
        Err(ApiError::Unavailable)
    }
}

/// Approve or reject a leave via `PUT /{manager|admin}/leave/{id}/{approve|reject}`.
///
/// # Errors
///
/// Returns an error if the request fails or the API refuses the transition.
pub async fn decide_leave(
    token: &str,
    scope: ApprovalScope,
    leave_id: i64,
    action: ApprovalAction,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = decision_endpoint(scope, leave_id, action);
        let resp = http::send(http::put(&endpoint, token).build()).await?;
        Ok(http::message(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, scope, leave_id, action);
        Err(ApiError::Unavailable)
    }
}
