//! HTTP client for the container engine.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

use domain::engine::{ContainerCreateRequest, ContainerCreated, ContainerEngine, EngineError};

use crate::config::DockerConfig;

/// Talks to a Docker-compatible engine over its REST API.
#[derive(Clone)]
pub struct DockerClient {
    http: Client,
    base_url: String,
}

impl DockerClient {
    pub fn new(config: &DockerConfig) -> Result<Self, EngineError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EngineError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Turns non-2xx responses into [`EngineError::Api`] with the engine's
    /// own message preserved.
    async fn check(response: Response) -> Result<Response, EngineError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| StatusCode::as_str(&status).to_string());
        Err(EngineError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContainerEngine for DockerClient {
    async fn info(&self) -> Result<serde_json::Value, EngineError> {
        let response = self
            .http
            .get(format!("{}/info", self.base_url))
            .send()
            .await
            .map_err(|e| EngineError::Request(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| EngineError::InvalidResponse(e.to_string()))
    }

    async fn create_container(
        &self,
        name: &str,
        request: &ContainerCreateRequest,
    ) -> Result<ContainerCreated, EngineError> {
        debug!(container = name, image = %request.image, "creating container");

        let response = self
            .http
            .post(format!("{}/container/create", self.base_url))
            .query(&[("name", name)])
            .json(request)
            .send()
            .await
            .map_err(|e| EngineError::Request(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| EngineError::InvalidResponse(e.to_string()))
    }

    async fn remove_container(&self, id: &str) -> Result<(), EngineError> {
        debug!(container = id, "removing container");

        let response = self
            .http
            .delete(format!("{}/container/{}", self.base_url, id))
            .query(&[("force", "true")])
            .send()
            .await
            .map_err(|e| EngineError::Request(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }
}
