//! User endpoint handlers.
//!
//! Responses never carry the password hash; the model skips that field
//! during serialization.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use domain::models::{User, UserRequest};

use crate::app::AppState;
use crate::error::ApiError;

/// Lists visible users.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.create(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get(id).await?))
}

pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .find_by_username(&username)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))
}

pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .find_by_email(&email)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))
}

/// Single lookup endpoint for login-style flows: the identity segment may be
/// either a username or an email address.
pub async fn get_user_by_identity(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .find_by_username_or_email(&identity, &identity)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UserRequest>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.update(id, request).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.restore(id).await?))
}
