//! User entity (database row mapping).

use domain::models::User;
use sqlx::FromRow;

/// Database row mapping for the users table. The password column holds the
/// Argon2id digest, never plaintext.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub group_id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub email: String,
    pub username: String,
    pub password: String,
    pub visible: bool,
    pub editable: bool,
    pub locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: i64,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            name: entity.name,
            phone: entity.phone,
            job_title: entity.job_title,
            email: entity.email,
            username: entity.username,
            password: entity.password,
            visible: entity.visible,
            editable: entity.editable,
            locked: entity.locked,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}
