//! User lifecycle service.

use shared::clock::{epoch_seconds, NOT_DELETED};
use shared::password::hash_password;
use tracing::info;

use crate::error::DomainError;
use crate::models::{NewUser, User, UserRequest};
use crate::normalize::{is_blank, lowercased, uppercased};
use crate::services::group::GroupService;
use crate::store::{GroupStore, UserStore};

const MIN_PASSWORD_LEN: usize = 6;

/// Owns the user lifecycle. Depends on [`GroupService`] to resolve the owning
/// group before any write; the user row only ever carries the group id.
#[derive(Clone)]
pub struct UserService<G, S> {
    groups: GroupService<G>,
    store: S,
}

/// Normalized candidate fields shared by the create and update paths.
struct Candidate {
    name: String,
    email: String,
    username: String,
}

impl<G: GroupStore, S: UserStore> UserService<G, S> {
    pub fn new(groups: GroupService<G>, store: S) -> Self {
        Self { groups, store }
    }

    /// Live, visible users.
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.store.list_visible().await?)
    }

    /// Live user by id.
    pub async fn get(&self, id: i64) -> Result<User, DomainError> {
        self.store
            .find_live(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user not found"))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.store.find_live_by_username(username).await?)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.store.find_live_by_email(email).await?)
    }

    pub async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, DomainError> {
        Ok(self
            .store
            .find_live_by_username_or_email(username, email)
            .await?)
    }

    /// Applies the per-field case rules up front, so the uniqueness checks
    /// run against exactly what would be stored.
    fn normalize(req: &UserRequest) -> Candidate {
        Candidate {
            name: req.name.as_deref().map(uppercased).unwrap_or_default(),
            email: req.email.as_deref().map(lowercased).unwrap_or_default(),
            username: req.username.as_deref().map(lowercased).unwrap_or_default(),
        }
    }

    /// Required-field and uniqueness rules, in order. Username and email
    /// checks only consider live rows, so a soft-deleted user frees both.
    async fn validate(&self, candidate: &Candidate, exclude_id: Option<i64>) -> Result<(), DomainError> {
        if is_blank(Some(&candidate.name)) {
            return Err(DomainError::validation("user name is required"));
        }
        if is_blank(Some(&candidate.username)) {
            return Err(DomainError::validation("user username is required"));
        }
        if is_blank(Some(&candidate.email)) {
            return Err(DomainError::validation("user email is required"));
        }
        if self
            .store
            .username_exists(&candidate.username, exclude_id)
            .await?
        {
            return Err(DomainError::validation("user username already exists"));
        }
        if self.store.email_exists(&candidate.email, exclude_id).await? {
            return Err(DomainError::validation("user email already exists"));
        }
        Ok(())
    }

    fn check_password_pair(password: &str, confirm: Option<&str>) -> Result<(), DomainError> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                "user password must be at least 6 characters",
            ));
        }
        if Some(password) != confirm {
            return Err(DomainError::validation("user passwords do not match"));
        }
        Ok(())
    }

    pub async fn create(&self, req: UserRequest) -> Result<User, DomainError> {
        let group_id = req
            .group_id
            .ok_or_else(|| DomainError::validation("user group is required"))?;
        let password = match req.password.as_deref() {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Err(DomainError::validation("user password is required")),
        };
        Self::check_password_pair(password, req.password_confirm.as_deref())?;

        // NotFound propagates when the referenced group is missing.
        let group = self.groups.get(group_id).await?;

        let candidate = Self::normalize(&req);
        self.validate(&candidate, None).await?;

        let now = epoch_seconds();
        let user = self
            .store
            .insert(NewUser {
                group_id: group.id,
                name: candidate.name,
                phone: req.phone,
                job_title: req.job_title,
                email: candidate.email,
                username: candidate.username,
                password: hash_password(password)?,
                visible: true,
                editable: true,
                locked: req.locked,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(user_id = user.id, username = %user.username, "user created");
        Ok(user)
    }

    /// Password is optional on update; omitting it keeps the stored hash.
    pub async fn update(&self, id: i64, req: UserRequest) -> Result<User, DomainError> {
        let group_id = req
            .group_id
            .ok_or_else(|| DomainError::validation("user group is required"))?;
        if let Some(password) = req.password.as_deref() {
            Self::check_password_pair(password, req.password_confirm.as_deref())?;
        }

        let group = self.groups.get(group_id).await?;
        let mut user = self.get(id).await?;

        let candidate = Self::normalize(&req);
        self.validate(&candidate, Some(id)).await?;

        user.group_id = group.id;
        user.name = candidate.name;
        user.phone = req.phone;
        user.job_title = req.job_title;
        user.email = candidate.email;
        user.username = candidate.username;
        if let Some(password) = req.password.as_deref() {
            user.password = hash_password(password)?;
        }
        user.locked = req.locked;
        user.updated_at = epoch_seconds();
        self.store.update(&user).await?;
        Ok(user)
    }

    /// Soft delete: stamps `deleted_at`, never removes the row.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut user = self.get(id).await?;
        let now = epoch_seconds();
        user.deleted_at = now;
        user.updated_at = now;
        self.store.update(&user).await?;
        info!(user_id = id, "user deleted");
        Ok(())
    }

    /// Restore by id regardless of deletion state.
    pub async fn restore(&self, id: i64) -> Result<User, DomainError> {
        let mut user = self
            .store
            .find_any(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user not found"))?;
        user.deleted_at = NOT_DELETED;
        user.updated_at = epoch_seconds();
        self.store.update(&user).await?;
        info!(user_id = id, "user restored");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupRequest;
    use crate::testing::{MemGroupStore, MemUserStore};
    use shared::password::verify_password;

    async fn service() -> (
        UserService<MemGroupStore, MemUserStore>,
        MemUserStore,
        i32,
    ) {
        let groups = GroupService::new(MemGroupStore::new());
        let group = groups
            .create(GroupRequest {
                name: Some("admin".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        let store = MemUserStore::new();
        (UserService::new(groups, store.clone()), store, group.id)
    }

    fn request(group_id: i32, username: &str, email: &str) -> UserRequest {
        UserRequest {
            group_id: Some(group_id),
            name: Some("Jane Doe".into()),
            email: Some(email.into()),
            username: Some(username.into()),
            password: Some("abcdef".into()),
            password_confirm: Some("abcdef".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_normalizes_and_hashes() {
        let (svc, _, gid) = service().await;
        let user = svc
            .create(request(gid, "Jane", "Jane.Doe@Example.COM"))
            .await
            .unwrap();
        assert_eq!(user.name, "JANE DOE");
        assert_eq!(user.username, "jane");
        assert_eq!(user.email, "jane.doe@example.com");
        assert_ne!(user.password, "abcdef");
        assert!(verify_password("abcdef", &user.password).unwrap());
    }

    #[tokio::test]
    async fn create_requires_group_reference() {
        let (svc, _, _) = service().await;
        let mut req = request(1, "jane", "jane@example.com");
        req.group_id = None;
        let err = svc.create(req).await.unwrap_err();
        assert_eq!(err.to_string(), "user group is required");
    }

    #[tokio::test]
    async fn create_with_missing_group_is_not_found() {
        let (svc, _, _) = service().await;
        let err = svc
            .create(request(999, "jane", "jane@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let (svc, _, gid) = service().await;
        let mut req = request(gid, "jane", "jane@example.com");
        req.password = Some("abcde".into());
        req.password_confirm = Some("abcde".into());
        let err = svc.create(req).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "user password must be at least 6 characters"
        );
    }

    #[tokio::test]
    async fn mismatched_confirmation_is_rejected() {
        let (svc, _, gid) = service().await;
        let mut req = request(gid, "jane", "jane@example.com");
        req.password_confirm = Some("abcdefg".into());
        let err = svc.create(req).await.unwrap_err();
        assert_eq!(err.to_string(), "user passwords do not match");
    }

    #[tokio::test]
    async fn duplicate_username_and_email_are_rejected() {
        let (svc, _, gid) = service().await;
        svc.create(request(gid, "jane", "jane@example.com"))
            .await
            .unwrap();

        let err = svc
            .create(request(gid, "Jane", "other@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "user username already exists");

        let err = svc
            .create(request(gid, "janet", "JANE@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "user email already exists");
    }

    #[tokio::test]
    async fn soft_deleted_user_frees_username_and_email() {
        let (svc, _, gid) = service().await;
        let user = svc
            .create(request(gid, "jane", "jane@example.com"))
            .await
            .unwrap();
        svc.delete(user.id).await.unwrap();
        // Unlike group names, user uniqueness is scoped to live rows.
        svc.create(request(gid, "jane", "jane@example.com"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_without_password_keeps_stored_hash() {
        let (svc, store, gid) = service().await;
        let user = svc
            .create(request(gid, "jane", "jane@example.com"))
            .await
            .unwrap();
        let original_hash = user.password.clone();

        let mut req = request(gid, "jane", "jane@example.com");
        req.password = None;
        req.password_confirm = None;
        req.job_title = Some("Lead".into());
        let updated = svc.update(user.id, req).await.unwrap();

        assert_eq!(updated.password, original_hash);
        assert_eq!(updated.job_title.as_deref(), Some("Lead"));
        assert_eq!(store.all()[0].password, original_hash);
    }

    #[tokio::test]
    async fn update_with_password_rehashes() {
        let (svc, _, gid) = service().await;
        let user = svc
            .create(request(gid, "jane", "jane@example.com"))
            .await
            .unwrap();

        let mut req = request(gid, "jane", "jane@example.com");
        req.password = Some("newpass".into());
        req.password_confirm = Some("newpass".into());
        let updated = svc.update(user.id, req).await.unwrap();

        assert!(verify_password("newpass", &updated.password).unwrap());
        assert!(!verify_password("abcdef", &updated.password).unwrap());
    }

    #[tokio::test]
    async fn delete_then_restore_round_trip() {
        let (svc, store, gid) = service().await;
        let user = svc
            .create(request(gid, "jane", "jane@example.com"))
            .await
            .unwrap();
        svc.delete(user.id).await.unwrap();
        assert!(store.all()[0].is_deleted());
        assert!(svc.list().await.unwrap().is_empty());

        let restored = svc.restore(user.id).await.unwrap();
        assert!(!restored.is_deleted());
        assert_eq!(restored.deleted_at, 0);
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lookups_only_see_live_users() {
        let (svc, _, gid) = service().await;
        let user = svc
            .create(request(gid, "jane", "jane@example.com"))
            .await
            .unwrap();
        assert!(svc.find_by_username("jane").await.unwrap().is_some());
        assert!(svc
            .find_by_username_or_email("nobody", "jane@example.com")
            .await
            .unwrap()
            .is_some());

        svc.delete(user.id).await.unwrap();
        assert!(svc.find_by_username("jane").await.unwrap().is_none());
        assert!(svc.find_by_email("jane@example.com").await.unwrap().is_none());
    }
}
