//! Sync Clients
//!
//! [`InventoryApi`] is the seam between the store and the network. The
//! trait is `?Send` so the same futures run on the browser event loop.

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::wire::{AddRow, ApiRequest, RemoteRow};
use crate::config::SyncConfig;
use crate::domain::Item;
use crate::error::{InventoryError, InventoryResult};

/// The three calls the spreadsheet endpoint understands
#[async_trait(?Send)]
pub trait InventoryApi {
    /// Fetch every row
    async fn list(&self) -> InventoryResult<Vec<RemoteRow>>;

    /// Append one item
    async fn add(&self, item: &Item) -> InventoryResult<()>;

    /// Adjust one item's quantity by a signed delta; the remote side clamps
    async fn update_quantity(&self, id: &str, delta: i64) -> InventoryResult<()>;
}

/// reqwest-backed client for a single endpoint URL
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpInventoryApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, body: &ApiRequest<'_>) -> InventoryResult<()> {
        let response = self.client.post(&self.endpoint).json(body).send().await?;
        let ack: Value = read_json(response).await?;
        debug!("sync ack: {}", ack);
        Ok(())
    }
}

#[async_trait(?Send)]
impl InventoryApi for HttpInventoryApi {
    async fn list(&self) -> InventoryResult<Vec<RemoteRow>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("action", "list")])
            .send()
            .await?;
        let rows: Vec<RemoteRow> = read_json(response).await?;
        debug!("sync list: {} rows", rows.len());
        Ok(rows)
    }

    async fn add(&self, item: &Item) -> InventoryResult<()> {
        self.post(&ApiRequest::Add { row: AddRow::from(item) }).await
    }

    async fn update_quantity(&self, id: &str, delta: i64) -> InventoryResult<()> {
        self.post(&ApiRequest::UpdateQuantity { id, delta }).await
    }
}

/// A non-success status or a body that is not JSON counts as failure
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> InventoryResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(InventoryError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Stand-in used when no endpoint is configured: every call fails, so the
/// store runs purely on the local snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

#[async_trait(?Send)]
impl InventoryApi for Offline {
    async fn list(&self) -> InventoryResult<Vec<RemoteRow>> {
        Err(InventoryError::NotConfigured)
    }

    async fn add(&self, _item: &Item) -> InventoryResult<()> {
        Err(InventoryError::NotConfigured)
    }

    async fn update_quantity(&self, _id: &str, _delta: i64) -> InventoryResult<()> {
        Err(InventoryError::NotConfigured)
    }
}

/// The client selected by configuration
#[derive(Debug, Clone)]
pub enum Remote {
    Http(HttpInventoryApi),
    Offline(Offline),
}

impl Remote {
    pub fn from_config(config: &SyncConfig) -> Self {
        match config.endpoint() {
            Some(url) => Remote::Http(HttpInventoryApi::new(url)),
            None => Remote::Offline(Offline),
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Remote::Offline(_))
    }
}

#[async_trait(?Send)]
impl InventoryApi for Remote {
    async fn list(&self) -> InventoryResult<Vec<RemoteRow>> {
        match self {
            Remote::Http(api) => api.list().await,
            Remote::Offline(api) => api.list().await,
        }
    }

    async fn add(&self, item: &Item) -> InventoryResult<()> {
        match self {
            Remote::Http(api) => api.add(item).await,
            Remote::Offline(api) => api.add(item).await,
        }
    }

    async fn update_quantity(&self, id: &str, delta: i64) -> InventoryResult<()> {
        match self {
            Remote::Http(api) => api.update_quantity(id, delta).await,
            Remote::Offline(api) => api.update_quantity(id, delta).await,
        }
    }
}
