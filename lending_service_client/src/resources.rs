use models_lending::resource::{Resource, ResourceKind, ResourceStatus};
use serde::{Deserialize, Serialize};

use super::LendingServiceClient;
use crate::error::{ClientError, ResponseExt};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    pub title: String,
    pub kind: ResourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FillCatalogResponse {
    pub message: String,
    pub added: u32,
}

impl LendingServiceClient {
    /// List the whole catalog.
    #[tracing::instrument(skip(self))]
    pub async fn list_resources(&self) -> Result<Vec<Resource>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/resources", self.url))
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<Vec<Resource>>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from list_resources: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Fetch a single catalog entry.
    #[tracing::instrument(skip(self))]
    pub async fn get_resource(&self, resource_id: i64) -> Result<Resource, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/resources/{}", self.url, resource_id))
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<Resource>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from get_resource: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Add a new entry to the catalog.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_resource(
        &self,
        request: CreateResourceRequest,
    ) -> Result<Resource, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/resources", self.url))
            .json(&request)
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<Resource>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from create_resource: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Take a catalog entry out of circulation.
    #[tracing::instrument(skip(self))]
    pub async fn disable_resource(&self, resource_id: i64) -> Result<Resource, ClientError> {
        self.set_resource_availability(resource_id, "disable").await
    }

    /// Put a catalog entry back into circulation.
    #[tracing::instrument(skip(self))]
    pub async fn enable_resource(&self, resource_id: i64) -> Result<Resource, ClientError> {
        self.set_resource_availability(resource_id, "enable").await
    }

    async fn set_resource_availability(
        &self,
        resource_id: i64,
        action: &str,
    ) -> Result<Resource, ClientError> {
        let response = self
            .client
            .put(format!(
                "{}/api/resources/{}/{}",
                self.url, resource_id, action
            ))
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<Resource>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from set_resource_availability: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Seed the demo catalog.
    #[tracing::instrument(skip(self))]
    pub async fn fill_catalog(&self) -> Result<FillCatalogResponse, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/resources/fill", self.url))
            .send()
            .await
            .map_client_error()
            .await?;

        let result = response.json::<FillCatalogResponse>().await.map_err(|e| {
            ClientError::Generic(anyhow::anyhow!(
                "unable to parse response from fill_catalog: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }
}
