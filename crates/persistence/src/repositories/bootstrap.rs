//! Bootstrap marker store backed by PostgreSQL.

use async_trait::async_trait;
use domain::store::BootstrapStore;
use sqlx::PgPool;
use tracing::debug;

#[derive(Clone)]
pub struct PgBootstrapStore {
    pool: PgPool,
}

impl PgBootstrapStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BootstrapStore for PgBootstrapStore {
    /// Conditional insert as the atomic claim: exactly one caller sees an
    /// affected row, concurrent first boots included.
    async fn claim_marker(&self, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO bootstrap_markers (name, claimed_at)
            VALUES ($1, EXTRACT(EPOCH FROM NOW())::BIGINT)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .execute(&self.pool)
        .await?;

        let claimed = result.rows_affected() == 1;
        debug!(marker = name, claimed, "bootstrap marker claim");
        Ok(claimed)
    }
}
