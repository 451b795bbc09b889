//! App provisioning endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};

use domain::engine::ContainerEngine;
use domain::models::{App, CreateAppRequest};

use crate::app::AppState;
use crate::error::ApiError;

/// Lists provisioned apps.
pub async fn list_apps(State(state): State<AppState>) -> Result<Json<Vec<App>>, ApiError> {
    Ok(Json(state.apps.list().await?))
}

/// Provisions a container on the engine and records the app.
pub async fn create_app(
    State(state): State<AppState>,
    Json(request): Json<CreateAppRequest>,
) -> Result<(StatusCode, Json<App>), ApiError> {
    let app = state.apps.create(request).await?;
    Ok((StatusCode::CREATED, Json(app)))
}

/// Engine diagnostic document, passed through unmodified.
pub async fn docker_info(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let info = state
        .docker
        .info()
        .await
        .map_err(|e| ApiError::Engine(e.to_string()))?;
    Ok(Json(info))
}
