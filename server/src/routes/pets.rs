//! Public pet catalog API.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use super::auth::message;
use crate::services::pets::PetFilter;
use crate::state::AppState;

/// `GET /api/pets` — catalog filtered by `type`, `status` and `breed`.
pub async fn list(State(state): State<AppState>, query: Result<Query<PetFilter>, QueryRejection>) -> Response {
    let Ok(Query(filter)) = query else {
        return message(StatusCode::BAD_REQUEST, "Invalid pet filter");
    };
    Json(state.pets.list(&filter).await).into_response()
}

/// `GET /api/pets/{id}`
pub async fn detail(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.pets.get(id).await {
        Some(pet) => Json(pet).into_response(),
        None => message(StatusCode::NOT_FOUND, "Pet not found"),
    }
}

#[cfg(test)]
#[path = "pets_test.rs"]
mod tests;
