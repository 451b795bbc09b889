//! Customer endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use domain::models::{Customer, CustomerRequest};

use crate::app::AppState;
use crate::error::ApiError;

/// Lists live customers.
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.customers.list().await?))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = state.customers.create(request).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers.get(id).await?))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CustomerRequest>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers.update(id, request).await?))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.customers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn restore_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers.restore(id).await?))
}
