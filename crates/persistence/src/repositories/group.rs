//! Group store backed by PostgreSQL.

use async_trait::async_trait;
use domain::models::{Group, NewGroup};
use domain::store::GroupStore;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::entities::GroupEntity;

#[derive(Clone)]
pub struct PgGroupStore {
    pool: PgPool,
}

impl PgGroupStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupStore for PgGroupStore {
    async fn list_visible(&self) -> Result<Vec<Group>, sqlx::Error> {
        let rows = sqlx::query_as::<_, GroupEntity>(
            "SELECT * FROM groups WHERE visible AND deleted_at = 0 ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Group::from).collect())
    }

    async fn find_live(&self, id: i32) -> Result<Option<Group>, sqlx::Error> {
        let row = sqlx::query_as::<_, GroupEntity>(
            "SELECT * FROM groups WHERE id = $1 AND deleted_at = 0",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Group::from))
    }

    async fn find_any(&self, id: i32) -> Result<Option<Group>, sqlx::Error> {
        let row = sqlx::query_as::<_, GroupEntity>("SELECT * FROM groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Group::from))
    }

    async fn find_live_by_name(&self, name: &str) -> Result<Option<Group>, sqlx::Error> {
        let row = sqlx::query_as::<_, GroupEntity>(
            "SELECT * FROM groups WHERE name = $1 AND deleted_at = 0",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Group::from))
    }

    async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, sqlx::Error> {
        // No deleted_at predicate: group names stay reserved after soft delete.
        match exclude_id {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM groups WHERE name = $1 AND id != $2)",
                )
                .bind(name)
                .bind(id)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM groups WHERE name = $1)")
                    .bind(name)
                    .fetch_one(&self.pool)
                    .await
            }
        }
    }

    async fn insert(&self, group: NewGroup) -> Result<Group, sqlx::Error> {
        let row = sqlx::query_as::<_, GroupEntity>(
            r#"
            INSERT INTO groups (name, permissions, visible, editable, locked, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&group.name)
        .bind(Json(&group.permissions))
        .bind(group.visible)
        .bind(group.editable)
        .bind(group.locked)
        .bind(group.created_at)
        .bind(group.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn update(&self, group: &Group) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE groups
            SET name = $2, permissions = $3, visible = $4, editable = $5,
                locked = $6, updated_at = $7, deleted_at = $8
            WHERE id = $1
            "#,
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(Json(&group.permissions))
        .bind(group.visible)
        .bind(group.editable)
        .bind(group.locked)
        .bind(group.updated_at)
        .bind(group.deleted_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
