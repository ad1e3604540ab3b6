//! HTTP registry client backed by `reqwest`

use super::{
    decode_entries, ComponentSummary, ExampleSummary, RegistryClient, RegistryItem,
    RegistryListing,
};
use crate::config::Config;
use crate::error::{CatalogError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Fetches registry documents over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    client: Client,
    config: Arc<Config>,
}

impl HttpRegistryClient {
    /// Build a client honouring the configured request timeout
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("uicatalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: &str) -> Result<T> {
        tracing::debug!("GET {} ({})", url, resource);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::fetch(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::fetch(resource, format!("HTTP {status} from {url}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::fetch(resource, e))?;
        decode(&body, resource)
    }
}

/// Decode a registry response body, reporting failures as fetch errors
pub(crate) fn decode<T: DeserializeOwned>(body: &str, resource: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| CatalogError::fetch(resource, format!("malformed response: {e}")))
}

#[async_trait::async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn list_catalog(&self) -> Result<Vec<serde_json::Value>> {
        let listing: RegistryListing<serde_json::Value> = self
            .get_json(&self.config.registry_file_url, "component list")
            .await?;
        Ok(listing.into_items())
    }

    async fn list_components(&self) -> Result<Vec<ComponentSummary>> {
        Ok(decode_entries(self.list_catalog().await?, "component list"))
    }

    async fn list_examples(&self) -> Result<Vec<ExampleSummary>> {
        let listing: RegistryListing<serde_json::Value> = self
            .get_json(&self.config.examples_file_url, "example list")
            .await?;
        Ok(decode_entries(listing.into_items(), "example list"))
    }

    async fn fetch_component(&self, name: &str) -> Result<RegistryItem> {
        self.get_json(&self.config.item_url(name), &format!("component '{name}'"))
            .await
    }

    async fn fetch_example(&self, name: &str) -> Result<RegistryItem> {
        self.get_json(&self.config.item_url(name), &format!("example '{name}'"))
            .await
    }
}
