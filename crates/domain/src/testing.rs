//! In-memory store doubles for service tests.

use async_trait::async_trait;
use shared::clock::NOT_DELETED;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::engine::{ContainerCreateRequest, ContainerCreated, ContainerEngine, EngineError};
use crate::models::{
    App, Customer, Group, NewApp, NewCustomer, NewGroup, NewUser, User,
};
use crate::store::{AppStore, BootstrapStore, CustomerStore, GroupStore, UserStore};

#[derive(Clone, Default)]
pub struct MemGroupStore {
    rows: Arc<Mutex<Vec<Group>>>,
}

impl MemGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Group> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl GroupStore for MemGroupStore {
    async fn list_visible(&self) -> Result<Vec<Group>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.visible && !g.is_deleted())
            .cloned()
            .collect())
    }

    async fn find_live(&self, id: i32) -> Result<Option<Group>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id && !g.is_deleted())
            .cloned())
    }

    async fn find_any(&self, id: i32) -> Result<Option<Group>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn find_live_by_name(&self, name: &str) -> Result<Option<Group>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.name == name && !g.is_deleted())
            .cloned())
    }

    async fn name_exists(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|g| g.name == name && Some(g.id) != exclude_id))
    }

    async fn insert(&self, group: NewGroup) -> Result<Group, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        let group = Group {
            id,
            name: group.name,
            permissions: group.permissions,
            visible: group.visible,
            editable: group.editable,
            locked: group.locked,
            created_at: group.created_at,
            updated_at: group.updated_at,
            deleted_at: NOT_DELETED,
        };
        rows.push(group.clone());
        Ok(group)
    }

    async fn update(&self, group: &Group) -> Result<(), sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slot) = rows.iter_mut().find(|g| g.id == group.id) {
            *slot = group.clone();
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemUserStore {
    rows: Arc<Mutex<Vec<User>>>,
}

impl MemUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn list_visible(&self) -> Result<Vec<User>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.visible && !u.is_deleted())
            .cloned()
            .collect())
    }

    async fn find_live(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id && !u.is_deleted())
            .cloned())
    }

    async fn find_any(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_live_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username && !u.is_deleted())
            .cloned())
    }

    async fn find_live_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email && !u.is_deleted())
            .cloned())
    }

    async fn find_live_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| (u.username == username || u.email == email) && !u.is_deleted())
            .cloned())
    }

    async fn username_exists(
        &self,
        username: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username == username && !u.is_deleted() && Some(u.id) != exclude_id))
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == email && !u.is_deleted() && Some(u.id) != exclude_id))
    }

    async fn insert(&self, user: NewUser) -> Result<User, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            group_id: user.group_id,
            name: user.name,
            phone: user.phone,
            job_title: user.job_title,
            email: user.email,
            username: user.username,
            password: user.password,
            visible: user.visible,
            editable: user.editable,
            locked: user.locked,
            created_at: user.created_at,
            updated_at: user.updated_at,
            deleted_at: NOT_DELETED,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<(), sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slot) = rows.iter_mut().find(|u| u.id == user.id) {
            *slot = user.clone();
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemCustomerStore {
    rows: Arc<Mutex<Vec<Customer>>>,
}

impl MemCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for MemCustomerStore {
    async fn list_live(&self) -> Result<Vec<Customer>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| !c.is_deleted())
            .cloned()
            .collect())
    }

    async fn find_live(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id && !c.is_deleted())
            .cloned())
    }

    async fn find_any(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn name_exists(&self, name: &str, exclude_id: Option<i64>) -> Result<bool, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.name == name && Some(c.id) != exclude_id))
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let customer = Customer {
            id,
            name: customer.name,
            phone: customer.phone,
            email: customer.email,
            document: customer.document,
            address: customer.address,
            contacts: customer.contacts,
            active: customer.active,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
            deleted_at: NOT_DELETED,
        };
        rows.push(customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: &Customer) -> Result<(), sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slot) = rows.iter_mut().find(|c| c.id == customer.id) {
            *slot = customer.clone();
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemAppStore {
    rows: Arc<Mutex<Vec<App>>>,
    fail: Arc<Mutex<bool>>,
}

impl MemAppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<App> {
        self.rows.lock().unwrap().clone()
    }

    /// Makes every subsequent insert fail, for compensation-path tests.
    pub fn fail_inserts(&self) {
        *self.fail.lock().unwrap() = true;
    }
}

#[async_trait]
impl AppStore for MemAppStore {
    async fn list_live(&self) -> Result<Vec<App>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.deleted_at == NOT_DELETED)
            .cloned()
            .collect())
    }

    async fn name_exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().any(|a| a.name == name))
    }

    async fn port_exists(&self, port: i32) -> Result<bool, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().any(|a| a.port == port))
    }

    async fn insert(&self, app: NewApp) -> Result<App, sqlx::Error> {
        if *self.fail.lock().unwrap() {
            return Err(sqlx::Error::PoolClosed);
        }
        let mut rows = self.rows.lock().unwrap();
        let app = App {
            id: uuid::Uuid::new_v4(),
            container: app.container,
            name: app.name,
            port: app.port,
            image: app.image,
            replicas: app.replicas,
            environments: app.environments,
            volumes: app.volumes,
            listening: app.listening,
            active: app.active,
            created_at: app.created_at,
            updated_at: app.updated_at,
            deleted_at: NOT_DELETED,
        };
        rows.push(app.clone());
        Ok(app)
    }
}

#[derive(Clone, Default)]
pub struct MemBootstrapStore {
    claimed: Arc<Mutex<HashSet<String>>>,
}

impl MemBootstrapStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BootstrapStore for MemBootstrapStore {
    async fn claim_marker(&self, name: &str) -> Result<bool, sqlx::Error> {
        Ok(self.claimed.lock().unwrap().insert(name.to_string()))
    }
}

/// Scripted container engine double.
#[derive(Clone, Default)]
pub struct FakeEngine {
    pub created: Arc<Mutex<Vec<(String, ContainerCreateRequest)>>>,
    pub removed: Arc<Mutex<Vec<String>>>,
    pub fail_create: Arc<Mutex<bool>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_creates(&self) {
        *self.fail_create.lock().unwrap() = true;
    }
}

#[async_trait]
impl ContainerEngine for FakeEngine {
    async fn info(&self) -> Result<serde_json::Value, EngineError> {
        Ok(serde_json::json!({"ServerVersion": "test"}))
    }

    async fn create_container(
        &self,
        name: &str,
        request: &ContainerCreateRequest,
    ) -> Result<ContainerCreated, EngineError> {
        if *self.fail_create.lock().unwrap() {
            return Err(EngineError::Api {
                status: 500,
                message: "engine unavailable".into(),
            });
        }
        self.created
            .lock()
            .unwrap()
            .push((name.to_string(), request.clone()));
        Ok(ContainerCreated {
            id: format!("ctr-{name}"),
            warnings: vec![],
        })
    }

    async fn remove_container(&self, id: &str) -> Result<(), EngineError> {
        self.removed.lock().unwrap().push(id.to_string());
        Ok(())
    }
}
