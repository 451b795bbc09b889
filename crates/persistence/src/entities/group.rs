//! Group entity (database row mapping).

use domain::models::Group;
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeSet;

/// Database row mapping for the groups table. Permissions live in a JSONB
/// column.
#[derive(Debug, Clone, FromRow)]
pub struct GroupEntity {
    pub id: i32,
    pub name: String,
    pub permissions: Json<BTreeSet<String>>,
    pub visible: bool,
    pub editable: bool,
    pub locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: i64,
}

impl From<GroupEntity> for Group {
    fn from(entity: GroupEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            permissions: entity.permissions.0,
            visible: entity.visible,
            editable: entity.editable,
            locked: entity.locked,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}
