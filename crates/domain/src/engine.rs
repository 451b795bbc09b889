//! Container-engine collaborator contract and wire types.
//!
//! The engine speaks the Docker-style API: PascalCase field names on the
//! wire, container creation addressed by name. Engine failures are surfaced
//! to callers as [`EngineError`] without translation into validation or
//! not-found errors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by the container engine collaborator.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("container engine request failed: {0}")]
    Request(String),

    #[error("container engine returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response from container engine: {0}")]
    InvalidResponse(String),
}

/// Container creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerCreateRequest {
    #[serde(rename = "Image")]
    pub image: String,

    #[serde(rename = "Cmd", skip_serializing_if = "Option::is_none")]
    pub cmd: Option<Vec<String>>,

    #[serde(rename = "Env")]
    pub env: Vec<String>,

    #[serde(rename = "Volumes")]
    pub volumes: Vec<HashMap<String, String>>,

    #[serde(rename = "NetworkingConfig", skip_serializing_if = "Option::is_none")]
    pub networking_config: Option<HashMap<String, serde_json::Value>>,
}

/// Container creation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerCreated {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Warnings", default)]
    pub warnings: Vec<String>,
}

/// The remote engine that instantiates application containers.
#[async_trait]
pub trait ContainerEngine: Send + Sync {
    /// Engine diagnostic document, passed through opaquely.
    async fn info(&self) -> Result<serde_json::Value, EngineError>;

    /// Creates a container under the given name and returns its identifier.
    async fn create_container(
        &self,
        name: &str,
        request: &ContainerCreateRequest,
    ) -> Result<ContainerCreated, EngineError>;

    /// Removes a container; used to compensate a failed local persist after
    /// remote creation succeeded.
    async fn remove_container(&self, id: &str) -> Result<(), EngineError>;
}
