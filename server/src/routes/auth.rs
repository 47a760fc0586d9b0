//! Auth routes: session lookup, login, registration, logout.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::security_log::SecurityAction;
use crate::services::users::{NewUser, PublicUser, Role, UserError};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: PublicUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user_id = app_state
            .sessions
            .validate(token)
            .await
            .map_err(|_| StatusCode::UNAUTHORIZED)?;
        let user = app_state.users.get(user_id).await.ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

/// Authenticated user holding the admin role. Other roles get `403`.
pub struct AdminUser(pub AuthUser);

impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if auth.user.role != Role::Admin {
            return Err(StatusCode::FORBIDDEN);
        }
        Ok(Self(auth))
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn session_cookie(token: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

fn cookie_max_age(state: &AppState) -> Duration {
    Duration::try_from(state.sessions.ttl()).unwrap_or(Duration::MAX)
}

/// First address in `X-Forwarded-For`, if present.
pub(crate) fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

pub(crate) fn user_error_to_status(error: &UserError) -> StatusCode {
    match error {
        UserError::UsernameTaken => StatusCode::CONFLICT,
        UserError::Invalid(_) => StatusCode::BAD_REQUEST,
        UserError::NotFound => StatusCode::NOT_FOUND,
        UserError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn message(status: StatusCode, text: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "message": text.into() }))).into_response()
}

/// Log a failed account operation and turn it into a `{"message"}` response.
pub(crate) fn user_error_response(error: &UserError, operation: &str) -> Response {
    let status = user_error_to_status(error);
    if status.is_server_error() {
        tracing::error!(error = %error, operation, "account operation failed");
    } else {
        tracing::info!(error = %error, operation, "account operation rejected");
    }
    message(status, error.to_string())
}

async fn start_session(state: &AppState, jar: CookieJar, user: &PublicUser) -> CookieJar {
    let token = state.sessions.create(user.id).await;
    jar.add(session_cookie(token, state.config.cookie_secure, cookie_max_age(state)))
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

/// `GET /api/user` — return the current user.
pub async fn current_user(auth: AuthUser) -> Json<PublicUser> {
    Json(auth.user)
}

/// `POST /api/login` — verify credentials, set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return message(StatusCode::BAD_REQUEST, "Invalid login request");
    };
    let ip = client_ip(&headers);

    let Some(user) = state.users.authenticate(&request.username, &request.password).await else {
        tracing::warn!(username = %request.username, "login failed");
        state
            .security_log
            .record(
                SecurityAction::LoginFailed,
                None,
                Some(format!("username={}", request.username.trim())),
                ip,
            )
            .await;
        return message(StatusCode::UNAUTHORIZED, "Invalid username or password");
    };

    let jar = start_session(&state, jar, &user).await;
    state
        .security_log
        .record(SecurityAction::Login, Some(user.id), None, ip)
        .await;
    tracing::info!(user_id = user.id, "login");
    (jar, Json(user)).into_response()
}

/// `POST /api/register` — create a standard account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Response {
    let Ok(Json(new_user)) = body else {
        return message(StatusCode::BAD_REQUEST, "Invalid registration request");
    };

    let user = match state.users.create(new_user, Role::User).await {
        Ok(user) => user,
        Err(e) => {
            return user_error_response(&e, "registration");
        }
    };

    let jar = start_session(&state, jar, &user).await;
    state
        .security_log
        .record(SecurityAction::Register, Some(user.id), None, client_ip(&headers))
        .await;
    tracing::info!(user_id = user.id, "registered");
    (StatusCode::CREATED, jar, Json(user)).into_response()
}

/// `POST /api/logout` — delete the session, clear the cookie. Always `204`.
pub async fn logout(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> impl IntoResponse {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default().to_owned();
    if !token.is_empty() {
        if let Some(user_id) = state.sessions.revoke(&token).await {
            state
                .security_log
                .record(SecurityAction::Logout, Some(user_id), None, client_ip(&headers))
                .await;
            tracing::info!(user_id, "logout");
        }
    }

    let cleared = session_cookie(String::new(), state.config.cookie_secure, Duration::ZERO);
    (jar.add(cleared), StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
