//! crudapp API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// API Client for the item service
#[derive(Clone)]
pub struct ItemsClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

/// Item as returned by the server. The id is opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ItemRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl ItemsClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/items/{}", self.base_url, urlencoding::encode(id))
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to crudapp API")?;

        ensure_success(resp).await?;
        Ok(())
    }

    /// List all Items
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let resp = self
            .client
            .get(self.items_url())
            .send()
            .await
            .context("Failed to connect to crudapp API")?;

        let items: Vec<Item> = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(items)
    }

    /// Create an Item
    pub async fn create_item(&self, name: &str) -> Result<Item> {
        let resp = self
            .client
            .post(self.items_url())
            .json(&ItemRequest { name })
            .send()
            .await
            .context("Failed to connect to crudapp API")?;

        let item: Item = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(item)
    }

    /// Rename an Item
    pub async fn update_item(&self, id: &str, name: &str) -> Result<Item> {
        let resp = self
            .client
            .put(self.item_url(id))
            .json(&ItemRequest { name })
            .send()
            .await
            .context("Failed to connect to crudapp API")?;

        let item: Item = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        tracing::debug!(?item, "Updated item");

        Ok(item)
    }

    /// Delete an Item
    pub async fn delete_item(&self, id: &str) -> Result<DeleteResponse> {
        let resp = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .context("Failed to connect to crudapp API")?;

        let deleted: DeleteResponse = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(deleted)
    }
}

async fn ensure_success(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }
    Ok(resp)
}
