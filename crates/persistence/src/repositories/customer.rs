//! Customer store backed by PostgreSQL.

use async_trait::async_trait;
use domain::models::{Customer, NewCustomer};
use domain::store::CustomerStore;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::entities::CustomerEntity;

#[derive(Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn list_live(&self) -> Result<Vec<Customer>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CustomerEntity>(
            "SELECT * FROM customers WHERE deleted_at = 0 ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_live(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let row = sqlx::query_as::<_, CustomerEntity>(
            "SELECT * FROM customers WHERE id = $1 AND deleted_at = 0",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Customer::from))
    }

    async fn find_any(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let row = sqlx::query_as::<_, CustomerEntity>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Customer::from))
    }

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> Result<bool, sqlx::Error> {
        // No deleted_at predicate: customer names stay reserved after soft
        // delete.
        match exclude_id {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM customers WHERE name = $1 AND id != $2)",
                )
                .bind(name)
                .bind(id)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE name = $1)")
                    .bind(name)
                    .fetch_one(&self.pool)
                    .await
            }
        }
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, sqlx::Error> {
        let row = sqlx::query_as::<_, CustomerEntity>(
            r#"
            INSERT INTO customers (name, phone, email, document, address,
                                   contacts, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.document)
        .bind(&customer.address)
        .bind(Json(&customer.contacts))
        .bind(customer.active)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn update(&self, customer: &Customer) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, phone = $3, email = $4, document = $5, address = $6,
                contacts = $7, active = $8, updated_at = $9, deleted_at = $10
            WHERE id = $1
            "#,
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.email)
        .bind(&customer.document)
        .bind(&customer.address)
        .bind(Json(&customer.contacts))
        .bind(customer.active)
        .bind(customer.updated_at)
        .bind(customer.deleted_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
