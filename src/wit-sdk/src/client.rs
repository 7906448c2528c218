use anyhow::{Context, Result};
use reqwest::{Client as ReqwestClient, StatusCode};

use crate::entities::EntityDefinition;

/// Base URL of the hosted service. Tests substitute a local mock server via
/// [`Client::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "https://api-wit-ai-1an7bd2zyeqn.runscope.net";

pub struct Client {
    client: ReqwestClient,
    token: String,
    version: String,
    base_url: String,
}

/// A response from the service: the status tag plus the raw body. The client
/// never branches on the status, that is left to callers.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl Client {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            client: ReqwestClient::new(),
            token,
            version: "20140620".to_string(),
            base_url,
        }
    }

    fn accept(&self) -> String {
        format!("application/vnd.wit.{}+json", self.version)
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl Client {
    /// Fetches the corpus of utterances the service has processed so far.
    pub async fn corpus(&self) -> Result<ApiResponse, anyhow::Error> {
        let request_builder = self
            .client
            .get(format!("{}/corpus", self.base_url))
            .header("authorization", self.authorization())
            .header("accept", self.accept());

        let response = request_builder
            .send()
            .await
            .context("failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read response text")?;
        tracing::debug!(%status, "GET /corpus");

        Ok(ApiResponse { status, body })
    }

    /// Creates (or overwrites) the given entity definition on the service.
    pub async fn create_entity(
        &self,
        entity: &EntityDefinition,
    ) -> Result<ApiResponse, anyhow::Error> {
        let request_builder = self
            .client
            .post(format!("{}/entities", self.base_url))
            .header("authorization", self.authorization())
            .header("accept", self.accept())
            .json(entity);

        let response = request_builder
            .send()
            .await
            .context("failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read response text")?;
        tracing::debug!(%status, entity_id = %entity.id, "POST /entities");

        Ok(ApiResponse { status, body })
    }
}
