//! App entity (database row mapping).

use domain::models::App;
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

/// Database row mapping for the apps table. Environments and volume
/// mappings live in JSONB columns.
#[derive(Debug, Clone, FromRow)]
pub struct AppEntity {
    pub id: Uuid,
    pub container: Option<String>,
    pub name: String,
    pub port: i32,
    pub image: String,
    pub replicas: i32,
    pub environments: Json<Vec<String>>,
    pub volumes: Json<Vec<HashMap<String, String>>>,
    pub listening: bool,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: i64,
}

impl From<AppEntity> for App {
    fn from(entity: AppEntity) -> Self {
        Self {
            id: entity.id,
            container: entity.container,
            name: entity.name,
            port: entity.port,
            image: entity.image,
            replicas: entity.replicas,
            environments: entity.environments.0,
            volumes: entity.volumes.0,
            listening: entity.listening,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}
