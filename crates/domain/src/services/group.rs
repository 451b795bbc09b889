//! Group lifecycle service.

use shared::clock::{epoch_seconds, NOT_DELETED};
use tracing::info;

use crate::error::DomainError;
use crate::models::{Group, GroupRequest, NewGroup};
use crate::normalize::is_blank;
use crate::store::GroupStore;

/// Owns creation, update, soft-delete and restore of groups, including the
/// store-wide name uniqueness rule.
#[derive(Clone)]
pub struct GroupService<S> {
    store: S,
}

impl<S: GroupStore> GroupService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Name must be present and unique. The check deliberately spans
    /// soft-deleted groups, so a deleted group still reserves its name.
    async fn validate(&self, req: &GroupRequest, exclude_id: Option<i32>) -> Result<String, DomainError> {
        if is_blank(req.name.as_deref()) {
            return Err(DomainError::validation("group name is required"));
        }
        let name = req.name.clone().unwrap();
        if self.store.name_exists(&name, exclude_id).await? {
            return Err(DomainError::validation("group name already exists"));
        }
        Ok(name)
    }

    /// Live, visible groups.
    pub async fn list(&self) -> Result<Vec<Group>, DomainError> {
        Ok(self.store.list_visible().await?)
    }

    /// Live group by id.
    pub async fn get(&self, id: i32) -> Result<Group, DomainError> {
        self.store
            .find_live(id)
            .await?
            .ok_or_else(|| DomainError::not_found("group not found"))
    }

    /// Live group by exact name; `None` instead of an error (seeding path).
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Group>, DomainError> {
        Ok(self.store.find_live_by_name(name).await?)
    }

    pub async fn create(&self, req: GroupRequest) -> Result<Group, DomainError> {
        let name = self.validate(&req, None).await?;
        let now = epoch_seconds();
        let group = self
            .store
            .insert(NewGroup {
                name,
                permissions: req.permissions,
                visible: true,
                editable: true,
                locked: req.locked,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(group_id = group.id, name = %group.name, "group created");
        Ok(group)
    }

    pub async fn update(&self, id: i32, req: GroupRequest) -> Result<Group, DomainError> {
        let name = self.validate(&req, Some(id)).await?;
        let mut group = self.get(id).await?;
        group.name = name;
        group.permissions = req.permissions;
        group.locked = req.locked;
        group.updated_at = epoch_seconds();
        self.store.update(&group).await?;
        Ok(group)
    }

    /// Soft delete: stamps `deleted_at`, never removes the row.
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut group = self.get(id).await?;
        let now = epoch_seconds();
        group.deleted_at = now;
        group.updated_at = now;
        self.store.update(&group).await?;
        info!(group_id = id, "group deleted");
        Ok(())
    }

    /// Restore by id regardless of deletion state. Restoring a live group is
    /// a successful no-op on `deleted_at`.
    pub async fn restore(&self, id: i32) -> Result<Group, DomainError> {
        let mut group = self
            .store
            .find_any(id)
            .await?
            .ok_or_else(|| DomainError::not_found("group not found"))?;
        group.deleted_at = NOT_DELETED;
        group.updated_at = epoch_seconds();
        self.store.update(&group).await?;
        info!(group_id = id, "group restored");
        Ok(group)
    }
}
