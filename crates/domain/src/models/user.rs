//! User entity and request DTO.

use serde::{Deserialize, Serialize};

/// An administrative user. The owning group is referenced by id and resolved
/// on demand through the group lifecycle, never cached on the user.
///
/// The stored password is a one-way Argon2id digest and is never serialized
/// back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub group_id: i32,
    /// Stored uppercased.
    pub name: String,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    /// Stored lowercased; unique among live users.
    pub email: String,
    /// Stored lowercased; unique among live users.
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub visible: bool,
    pub editable: bool,
    pub locked: bool,
    pub created_at: i64,
    pub updated_at: i64,
    /// Epoch second of soft deletion; 0 means the row is live.
    pub deleted_at: i64,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at != 0
    }
}

/// Insert payload for a user; the id is storage-generated. Fields are
/// expected to be normalized and the password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
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
}

/// Request payload for creating or updating a user. On update the password
/// pair may be omitted to keep the stored hash.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRequest {
    pub group_id: Option<i32>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
    #[serde(default)]
    pub locked: bool,
}
