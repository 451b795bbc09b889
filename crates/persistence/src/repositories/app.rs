//! App store backed by PostgreSQL.

use async_trait::async_trait;
use domain::models::{App, NewApp};
use domain::store::AppStore;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AppEntity;

#[derive(Clone)]
pub struct PgAppStore {
    pool: PgPool,
}

impl PgAppStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppStore for PgAppStore {
    async fn list_live(&self) -> Result<Vec<App>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AppEntity>(
            "SELECT * FROM apps WHERE deleted_at = 0 ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(App::from).collect())
    }

    async fn name_exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM apps WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
    }

    async fn port_exists(&self, port: i32) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM apps WHERE port = $1)")
            .bind(port)
            .fetch_one(&self.pool)
            .await
    }

    async fn insert(&self, app: NewApp) -> Result<App, sqlx::Error> {
        let row = sqlx::query_as::<_, AppEntity>(
            r#"
            INSERT INTO apps (id, container, name, port, image, replicas,
                              environments, volumes, listening, active,
                              created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&app.container)
        .bind(&app.name)
        .bind(app.port)
        .bind(&app.image)
        .bind(app.replicas)
        .bind(Json(&app.environments))
        .bind(Json(&app.volumes))
        .bind(app.listening)
        .bind(app.active)
        .bind(app.created_at)
        .bind(app.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }
}
