//! Storage collaborator traits consumed by the lifecycle services.
//!
//! Implementations live in the persistence crate (PostgreSQL). The traits
//! expose exactly the predicates the services need: live/any lookups,
//! per-field existence checks with an optional exclude-self id for updates,
//! insert, and update. `sqlx::Error` is the storage error currency.
//!
//! Uniqueness scoping is intentionally asymmetric and must be preserved:
//! group and customer name checks span soft-deleted rows, while user
//! username/email checks only consider live rows.

use async_trait::async_trait;

use crate::models::{
    App, Customer, Group, NewApp, NewCustomer, NewGroup, NewUser, User,
};

#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Live, visible groups in storage-native order.
    async fn list_visible(&self) -> Result<Vec<Group>, sqlx::Error>;

    /// Group by id with `deleted_at = 0`.
    async fn find_live(&self, id: i32) -> Result<Option<Group>, sqlx::Error>;

    /// Group by id regardless of deletion state (restore path).
    async fn find_any(&self, id: i32) -> Result<Option<Group>, sqlx::Error>;

    /// Live group by exact name (seeding path).
    async fn find_live_by_name(&self, name: &str) -> Result<Option<Group>, sqlx::Error>;

    /// Name existence check spanning soft-deleted rows as well.
    async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, sqlx::Error>;

    async fn insert(&self, group: NewGroup) -> Result<Group, sqlx::Error>;

    async fn update(&self, group: &Group) -> Result<(), sqlx::Error>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Live, visible users in storage-native order.
    async fn list_visible(&self) -> Result<Vec<User>, sqlx::Error>;

    /// User by id with `deleted_at = 0`.
    async fn find_live(&self, id: i64) -> Result<Option<User>, sqlx::Error>;

    /// User by id regardless of deletion state (restore path).
    async fn find_any(&self, id: i64) -> Result<Option<User>, sqlx::Error>;

    async fn find_live_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;

    async fn find_live_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;

    async fn find_live_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error>;

    /// Username existence among live rows only.
    async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error>;

    /// Email existence among live rows only.
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>)
        -> Result<bool, sqlx::Error>;

    async fn insert(&self, user: NewUser) -> Result<User, sqlx::Error>;

    async fn update(&self, user: &User) -> Result<(), sqlx::Error>;
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All live customers (customers carry no visibility flag).
    async fn list_live(&self) -> Result<Vec<Customer>, sqlx::Error>;

    /// Customer by id with `deleted_at = 0`.
    async fn find_live(&self, id: i64) -> Result<Option<Customer>, sqlx::Error>;

    /// Customer by id regardless of deletion state (restore path).
    async fn find_any(&self, id: i64) -> Result<Option<Customer>, sqlx::Error>;

    /// Name existence check spanning soft-deleted rows as well.
    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> Result<bool, sqlx::Error>;

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, sqlx::Error>;

    async fn update(&self, customer: &Customer) -> Result<(), sqlx::Error>;
}

#[async_trait]
pub trait AppStore: Send + Sync {
    /// All live apps.
    async fn list_live(&self) -> Result<Vec<App>, sqlx::Error>;

    async fn name_exists(&self, name: &str) -> Result<bool, sqlx::Error>;

    async fn port_exists(&self, port: i32) -> Result<bool, sqlx::Error>;

    async fn insert(&self, app: NewApp) -> Result<App, sqlx::Error>;
}

/// One-shot startup claims, backing the initial seeder.
#[async_trait]
pub trait BootstrapStore: Send + Sync {
    /// Atomically claims the named marker. Returns true for the single caller
    /// that wins the claim; false if it was already claimed.
    async fn claim_marker(&self, name: &str) -> Result<bool, sqlx::Error>;
}
