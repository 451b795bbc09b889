//! Provisioned application entity and request DTO.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

/// A provisioned application. `container` is a back-reference into the
/// container engine's namespace, not a local foreign key; it stays `None`
/// until provisioning has succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    pub id: Uuid,
    pub container: Option<String>,
    /// Stored lowercased; unique.
    pub name: String,
    /// Unique host port.
    pub port: i32,
    /// Stored lowercased.
    pub image: String,
    pub replicas: i32,
    /// Ordered `KEY=VALUE` strings passed to the container.
    pub environments: Vec<String>,
    pub volumes: Vec<HashMap<String, String>>,
    pub listening: bool,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    /// Epoch second of soft deletion; 0 means the row is live.
    pub deleted_at: i64,
}

/// Insert payload for an app; the id is generated on insert.
#[derive(Debug, Clone)]
pub struct NewApp {
    pub container: Option<String>,
    pub name: String,
    pub port: i32,
    pub image: String,
    pub replicas: i32,
    pub environments: Vec<String>,
    pub volumes: Vec<HashMap<String, String>>,
    pub listening: bool,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Request payload for provisioning an app.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppRequest {
    #[validate(length(min = 1, message = "app name is required"))]
    pub name: String,

    #[validate(range(min = 1, max = 65535, message = "app port must be between 1 and 65535"))]
    pub port: i32,

    #[validate(length(min = 1, message = "app image is required"))]
    pub image: String,

    #[validate(range(min = 1, message = "app replicas must be at least 1"))]
    #[serde(default = "default_replicas")]
    pub replicas: i32,

    #[serde(default)]
    pub environments: Vec<String>,

    #[serde(default)]
    pub volumes: Vec<HashMap<String, String>>,

    #[serde(default)]
    pub listening: bool,

    #[serde(default)]
    pub active: bool,
}

fn default_replicas() -> i32 {
    1
}
