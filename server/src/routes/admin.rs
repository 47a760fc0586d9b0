//! Admin console API: audit trail, dashboard figures, account management.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::auth::{AdminUser, client_ip, message, user_error_response};
use crate::services::security_log::{SecurityAction, SecurityLogEntry};
use crate::services::users::{NewUser, PublicUser, Role, UserUpdate};
use crate::state::AppState;

/// Security events shown on the dashboard.
const DASHBOARD_RECENT_EVENTS: usize = 5;

/// `GET /api/admin/security-logs` — audit trail, newest first.
pub async fn security_logs(AdminUser(admin): AdminUser, State(state): State<AppState>) -> Json<Vec<SecurityLogEntry>> {
    tracing::debug!(user_id = admin.user.id, "security log requested");
    Json(state.security_log.list().await)
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub active_users: usize,
    pub admins: usize,
    pub total_pets: usize,
    pub available_pets: usize,
    pub fostered_pets: usize,
    pub adopted_pets: usize,
    pub recent_security_events: Vec<SecurityLogEntry>,
}

/// `GET /api/admin/dashboard-stats`
pub async fn dashboard_stats(AdminUser(_): AdminUser, State(state): State<AppState>) -> Json<DashboardStats> {
    let pets = state.pets.counts().await;
    Json(DashboardStats {
        active_users: state.users.count_role(Role::User).await,
        admins: state.users.count_role(Role::Admin).await,
        total_pets: pets.total,
        available_pets: pets.available,
        fostered_pets: pets.fostered,
        adopted_pets: pets.adopted,
        recent_security_events: state.security_log.recent(DASHBOARD_RECENT_EVENTS).await,
    })
}

/// `GET /api/admin/users` — every account, ordered by id.
pub async fn list_users(AdminUser(_): AdminUser, State(state): State<AppState>) -> Json<Vec<PublicUser>> {
    Json(state.users.list().await)
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(flatten)]
    account: NewUser,
    #[serde(default)]
    role: Option<Role>,
}

/// `POST /api/admin/users` — create an account with an explicit role.
pub async fn create_user(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = body else {
        return message(StatusCode::BAD_REQUEST, "Invalid user request");
    };
    let role = request.role.unwrap_or(Role::User);
    match state.users.create(request.account, role).await {
        Ok(user) => {
            state
                .security_log
                .record(
                    SecurityAction::UserCreated,
                    Some(admin.user.id),
                    Some(format!("user_id={} role={role:?}", user.id)),
                    client_ip(&headers),
                )
                .await;
            tracing::info!(admin_id = admin.user.id, user_id = user.id, "user created");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(e) => user_error_response(&e, "create user"),
    }
}

/// `PATCH /api/admin/users/{id}` — change name, email or role.
pub async fn update_user(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Result<Json<UserUpdate>, JsonRejection>,
) -> Response {
    let Ok(Json(update)) = body else {
        return message(StatusCode::BAD_REQUEST, "Invalid user update");
    };
    match state.users.update(id, update).await {
        Ok(user) => {
            state
                .security_log
                .record(
                    SecurityAction::UserUpdated,
                    Some(admin.user.id),
                    Some(format!("user_id={id}")),
                    client_ip(&headers),
                )
                .await;
            tracing::info!(admin_id = admin.user.id, user_id = id, "user updated");
            Json(user).into_response()
        }
        Err(e) => user_error_response(&e, "update user"),
    }
}

/// `DELETE /api/admin/users/{id}` — remove an account and end its sessions.
pub async fn delete_user(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    if id == admin.user.id {
        return message(StatusCode::BAD_REQUEST, "Cannot delete your own account");
    }
    match state.users.delete(id).await {
        Ok(user) => {
            let revoked = state.sessions.revoke_user(id).await;
            state
                .security_log
                .record(
                    SecurityAction::UserDeleted,
                    Some(admin.user.id),
                    Some(format!("user_id={id} username={}", user.username)),
                    client_ip(&headers),
                )
                .await;
            tracing::info!(admin_id = admin.user.id, user_id = id, revoked, "user deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => user_error_response(&e, "delete user"),
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
