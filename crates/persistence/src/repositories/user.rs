//! User store backed by PostgreSQL.

use async_trait::async_trait;
use domain::models::{NewUser, User};
use domain::store::UserStore;
use sqlx::PgPool;

use crate::entities::UserEntity;

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_visible(&self) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query_as::<_, UserEntity>(
            "SELECT * FROM users WHERE visible AND deleted_at = 0 ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_live(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let row =
            sqlx::query_as::<_, UserEntity>("SELECT * FROM users WHERE id = $1 AND deleted_at = 0")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(User::from))
    }

    async fn find_any(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query_as::<_, UserEntity>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn find_live_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query_as::<_, UserEntity>(
            "SELECT * FROM users WHERE username = $1 AND deleted_at = 0",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn find_live_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query_as::<_, UserEntity>(
            "SELECT * FROM users WHERE email = $1 AND deleted_at = 0",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn find_live_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query_as::<_, UserEntity>(
            "SELECT * FROM users WHERE (username = $1 OR email = $2) AND deleted_at = 0 LIMIT 1",
        )
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        match exclude_id {
            Some(id) => sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND deleted_at = 0 AND id != $2)",
            )
            .bind(username)
            .bind(id)
            .fetch_one(&self.pool)
            .await,
            None => sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND deleted_at = 0)",
            )
            .bind(username)
            .fetch_one(&self.pool)
            .await,
        }
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        match exclude_id {
            Some(id) => sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND deleted_at = 0 AND id != $2)",
            )
            .bind(email)
            .bind(id)
            .fetch_one(&self.pool)
            .await,
            None => sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND deleted_at = 0)",
            )
            .bind(email)
            .fetch_one(&self.pool)
            .await,
        }
    }

    async fn insert(&self, user: NewUser) -> Result<User, sqlx::Error> {
        let row = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (group_id, name, phone, job_title, email, username,
                               password, visible, editable, locked, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(user.group_id)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.job_title)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.visible)
        .bind(user.editable)
        .bind(user.locked)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn update(&self, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET group_id = $2, name = $3, phone = $4, job_title = $5, email = $6,
                username = $7, password = $8, visible = $9, editable = $10,
                locked = $11, updated_at = $12, deleted_at = $13
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(user.group_id)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.job_title)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.visible)
        .bind(user.editable)
        .bind(user.locked)
        .bind(user.updated_at)
        .bind(user.deleted_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
