//! Group endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use domain::models::{Group, GroupRequest};

use crate::app::AppState;
use crate::error::ApiError;

/// Lists visible groups.
pub async fn list_groups(State(state): State<AppState>) -> Result<Json<Vec<Group>>, ApiError> {
    Ok(Json(state.groups.list().await?))
}

pub async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<GroupRequest>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let group = state.groups.create(request).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(state.groups.get(id).await?))
}

/// Looks a group up by its exact stored name.
pub async fn get_group_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Group>, ApiError> {
    state
        .groups
        .find_by_name(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("group not found".to_string()))
}

pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<GroupRequest>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(state.groups.update(id, request).await?))
}

pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.groups.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Brings a soft-deleted group back into service.
pub async fn restore_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(state.groups.restore(id).await?))
}
