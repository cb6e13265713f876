//! Sync Configuration
//!
//! Where the spreadsheet endpoint lives and which slot the local snapshot
//! uses. The browser build fills it in at compile time. A missing endpoint
//! means local-only mode.

use crate::repository::DEFAULT_SNAPSHOT_KEY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Spreadsheet endpoint URL; `None` (or blank) disables remote sync
    pub endpoint: Option<String>,
    /// Slot name for the local snapshot
    pub storage_key: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            storage_key: DEFAULT_SNAPSHOT_KEY.to_string(),
        }
    }
}

impl SyncConfig {
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Endpoint URL if one is set and non-blank
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    pub fn is_online(&self) -> bool {
        self.endpoint().is_some()
    }
}
