//! REST API helpers for the session endpoint, the pet catalog and the admin
//! console.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting "no session" since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result`/`Option` outputs instead of panics. Session failures
//! carry a typed [`SessionError`] so the identity context can fail closed and
//! the login form can show a precise reason.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{
    Credentials, DashboardStats, NewAccount, Pet, PetFilter, Principal, Registration, SecurityLogEntry, UserUpdate,
};

pub const SESSION_ENDPOINT: &str = "/api/user";
pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const REGISTER_ENDPOINT: &str = "/api/register";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";
pub const SECURITY_LOGS_ENDPOINT: &str = "/api/admin/security-logs";
pub const PETS_ENDPOINT: &str = "/api/pets";
pub const ADMIN_USERS_ENDPOINT: &str = "/api/admin/users";
pub const DASHBOARD_STATS_ENDPOINT: &str = "/api/admin/dashboard-stats";

#[must_use]
pub fn pet_endpoint(id: &str) -> String {
    format!("{PETS_ENDPOINT}/{id}")
}

#[must_use]
pub fn admin_user_endpoint(id: i64) -> String {
    format!("{ADMIN_USERS_ENDPOINT}/{id}")
}

/// Message for a failed admin mutation, preferring the server's reason.
#[cfg(any(test, feature = "hydrate"))]
fn admin_request_failed_message(action: &str, status: u16, reason: Option<String>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => reason,
        _ => format!("{action} failed: {status}"),
    }
}

/// Why a session operation failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("username is already taken")]
    UsernameTaken,
    /// The server refused the request body; carries its reason.
    #[error("{0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({0})")]
    Server(u16),
}

/// Map a non-success HTTP status from the session endpoint to a reason.
/// `message` is the `{"message": ...}` body the server sends with a 400.
#[must_use]
pub fn classify_status(status: u16, message: Option<String>) -> SessionError {
    match status {
        400 => SessionError::Rejected(message.unwrap_or_else(|| "invalid request".to_owned())),
        401 => SessionError::InvalidCredentials,
        409 => SessionError::UsernameTaken,
        other => SessionError::Server(other),
    }
}

/// Error body returned by the server for rejected requests.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// The authentication service consumed by the identity context.
///
/// Futures are not `Send`: the browser implementation runs on the UI thread.
#[async_trait(?Send)]
pub trait SessionService {
    /// Check the stored session. `Ok(None)` means no active session.
    async fn resolve_session(&self) -> Result<Option<Principal>, SessionError>;

    async fn login(&self, credentials: &Credentials) -> Result<Principal, SessionError>;

    async fn register(&self, registration: &Registration) -> Result<Principal, SessionError>;

    async fn logout(&self) -> Result<(), SessionError>;
}

/// [`SessionService`] backed by the server's cookie-session HTTP endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSessionService;

#[async_trait(?Send)]
impl SessionService for HttpSessionService {
    async fn resolve_session(&self) -> Result<Option<Principal>, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
                .send()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            if resp.status() == 401 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(SessionError::Server(resp.status()));
            }
            let principal = resp
                .json::<Principal>()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            Ok(Some(principal))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<Principal, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            post_for_principal(LOGIN_ENDPOINT, credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(unavailable())
        }
    }

    async fn register(&self, registration: &Registration) -> Result<Principal, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            post_for_principal(REGISTER_ENDPOINT, registration).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(unavailable())
        }
    }

    async fn logout(&self) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(|e| SessionError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(SessionError::Server(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> SessionError {
    SessionError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn post_for_principal<B: serde::Serialize>(url: &str, body: &B) -> Result<Principal, SessionError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| SessionError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;
    if !resp.ok() {
        let message = resp.json::<ErrorBody>().await.ok().map(|body| body.message);
        return Err(classify_status(resp.status(), message));
    }
    resp.json::<Principal>()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))
}

/// Fetch the security log from `/api/admin/security-logs`.
/// Returns `None` if the caller is not an admin, on failure, or on the server.
pub async fn fetch_security_logs() -> Option<Vec<SecurityLogEntry>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SECURITY_LOGS_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<SecurityLogEntry>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the catalog from `/api/pets`, narrowed by `filter`.
/// Returns `None` on failure or on the server.
pub async fn fetch_pets(filter: &PetFilter) -> Option<Vec<Pet>> {
    #[cfg(feature = "hydrate")]
    {
        let pairs = filter.query_pairs();
        let resp = gloo_net::http::Request::get(PETS_ENDPOINT)
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Pet>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        None
    }
}

/// Fetch one pet from `/api/pets/{id}`. `None` if unknown or on failure.
pub async fn fetch_pet(id: &str) -> Option<Pet> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&pet_endpoint(id)).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Pet>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Fetch every account from `/api/admin/users`.
pub async fn fetch_users() -> Option<Vec<Principal>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ADMIN_USERS_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Principal>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the admin dashboard figures.
pub async fn fetch_dashboard_stats() -> Option<DashboardStats> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DASHBOARD_STATS_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<DashboardStats>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create an account via `POST /api/admin/users`.
///
/// # Errors
///
/// Returns the server's reason, or a status message if it sent none.
pub async fn create_user(account: &NewAccount) -> Result<Principal, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ADMIN_USERS_ENDPOINT)
            .json(account)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let reason = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
            return Err(admin_request_failed_message("create user", resp.status(), reason));
        }
        resp.json::<Principal>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = account;
        Err("not available on server".to_owned())
    }
}

/// Apply `update` via `PATCH /api/admin/users/{id}`.
///
/// # Errors
///
/// Returns the server's reason, or a status message if it sent none.
pub async fn update_user(id: i64, update: &UserUpdate) -> Result<Principal, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&admin_user_endpoint(id))
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let reason = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
            return Err(admin_request_failed_message("update user", resp.status(), reason));
        }
        resp.json::<Principal>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, update);
        Err("not available on server".to_owned())
    }
}

/// Remove an account via `DELETE /api/admin/users/{id}`.
///
/// # Errors
///
/// Returns the server's reason, or a status message if it sent none.
pub async fn delete_user(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&admin_user_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let reason = resp.json::<ErrorBody>().await.ok().map(|b| b.message);
            return Err(admin_request_failed_message("delete user", resp.status(), reason));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
