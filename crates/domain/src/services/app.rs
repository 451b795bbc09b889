//! App provisioning service.
//!
//! Two-phase creation: the remote container is created first, then the local
//! App record is persisted with the returned container id. If the local
//! persist fails, the remote container is removed best-effort so the engine
//! is not left with an orphan nothing references.

use shared::clock::epoch_seconds;
use tracing::{error, info, warn};
use validator::Validate;

use crate::engine::{ContainerCreateRequest, ContainerEngine};
use crate::error::DomainError;
use crate::models::{App, CreateAppRequest, NewApp};
use crate::normalize::lowercased;
use crate::store::AppStore;

#[derive(Clone)]
pub struct AppProvisioner<S, E> {
    store: S,
    engine: E,
}

impl<S: AppStore, E: ContainerEngine> AppProvisioner<S, E> {
    pub fn new(store: S, engine: E) -> Self {
        Self { store, engine }
    }

    /// All live apps.
    pub async fn list(&self) -> Result<Vec<App>, DomainError> {
        Ok(self.store.list_live().await?)
    }

    /// Provisions an app: validates the request, checks local name/port
    /// uniqueness before touching the engine, creates the remote container,
    /// then records the App. Engine failures propagate untranslated.
    pub async fn create(&self, req: CreateAppRequest) -> Result<App, DomainError> {
        req.validate()?;

        let name = lowercased(&req.name);
        let image = lowercased(&req.image);

        if self.store.name_exists(&name).await? {
            return Err(DomainError::validation("app name already exists"));
        }
        if self.store.port_exists(req.port).await? {
            return Err(DomainError::validation("app port already exists"));
        }

        let request = ContainerCreateRequest {
            image: image.clone(),
            cmd: None,
            env: req.environments.clone(),
            volumes: req.volumes.clone(),
            networking_config: None,
        };
        let created = self.engine.create_container(&name, &request).await?;
        for warning in &created.warnings {
            warn!(app = %name, warning = %warning, "container engine warning");
        }

        let now = epoch_seconds();
        let new_app = NewApp {
            container: Some(created.id.clone()),
            name: name.clone(),
            port: req.port,
            image,
            replicas: req.replicas,
            environments: req.environments,
            volumes: req.volumes,
            listening: req.listening,
            active: req.active,
            created_at: now,
            updated_at: now,
        };

        match self.store.insert(new_app).await {
            Ok(app) => {
                info!(app_id = %app.id, name = %app.name, container = ?app.container, "app provisioned");
                Ok(app)
            }
            Err(persist_err) => {
                // Compensate the remote side so the failed create leaves no
                // orphaned container behind.
                if let Err(remove_err) = self.engine.remove_container(&created.id).await {
                    error!(
                        container = %created.id,
                        error = %remove_err,
                        "failed to remove container after persist failure; manual cleanup required"
                    );
                }
                Err(persist_err.into())
            }
        }
    }
}
