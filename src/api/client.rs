//! reqwest implementation of [`ItemApi`] against a JSON REST endpoint.
//!
//! ```text
//! GET    {base}/items        → [Item]
//! GET    {base}/items/{id}   → Item
//! PUT    {base}/items/{id}   → Item      body: ItemForm + identifier
//! DELETE {base}/items/{id}   → (any 2xx)
//! ```

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::backend::{ItemApi, RemoteError};
use crate::core::item::{Item, ItemId, ItemUpdate};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpItemApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpItemApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        info!("Item API at {} (timeout {:?})", base_url, timeout);
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/items/{}", self.base_url, id)
    }
}

/// Turns a non-2xx response into a [`RemoteError`], passing 2xx through.
async fn check_status(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, RemoteError> {
    debug!("{} response status: {}", operation, response.status());

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(RemoteError::new(operation, format!("HTTP {status}: {body}")))
}

async fn decode<T: DeserializeOwned>(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<T, RemoteError> {
    response
        .json::<T>()
        .await
        .map_err(|e| RemoteError::new(operation, format!("malformed response: {e}")))
}

fn network(operation: &'static str) -> impl FnOnce(reqwest::Error) -> RemoteError {
    move |e| RemoteError::new(operation, e.to_string())
}

#[async_trait]
impl ItemApi for HttpItemApi {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_items(&self) -> Result<Vec<Item>, RemoteError> {
        const OP: &str = "fetch items";
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(network(OP))?;
        let response = check_status(OP, response).await?;
        decode(OP, response).await
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, RemoteError> {
        const OP: &str = "fetch item";
        let response = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(network(OP))?;
        let response = check_status(OP, response).await?;
        decode(OP, response).await
    }

    async fn put_item(&self, id: ItemId, update: &ItemUpdate<'_>) -> Result<Item, RemoteError> {
        const OP: &str = "update item";
        let response = self
            .client
            .put(self.item_url(id))
            .json(update)
            .send()
            .await
            .map_err(network(OP))?;
        let response = check_status(OP, response).await?;
        decode(OP, response).await
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), RemoteError> {
        const OP: &str = "remove item";
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(network(OP))?;
        check_status(OP, response).await?;
        Ok(())
    }
}
