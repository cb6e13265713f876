//! Snapshot Adapter
//!
//! Saves and restores the full item collection as one JSON array. This is a
//! cache, not a system of record: every failure is logged and swallowed.
//! Entries are read as leniently as remote rows, so one bad entry only
//! costs that entry.

use log::{debug, warn};
use serde_json::Value;

use super::traits::SnapshotSlot;
use crate::domain::Item;
use crate::error::InventoryResult;
use crate::sync::{normalize_rows, RemoteRow};

/// Slot name the collection is stored under
pub const DEFAULT_SNAPSHOT_KEY: &str = "gabaInventory";

/// Whole-collection persistence on top of a [`SnapshotSlot`]
#[derive(Debug, Clone)]
pub struct Snapshot<S> {
    slot: S,
    key: String,
}

impl<S: SnapshotSlot> Snapshot<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, DEFAULT_SNAPSHOT_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self { slot, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Last saved collection, or empty if nothing usable is stored
    pub fn load(&self) -> Vec<Item> {
        match self.try_load() {
            Ok(items) => {
                debug!("snapshot '{}': loaded {} items", self.key, items.len());
                items
            }
            Err(e) => {
                warn!("snapshot '{}': load failed, starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection
    pub fn save(&self, items: &[Item]) {
        if let Err(e) = self.try_save(items) {
            warn!("snapshot '{}': save failed: {}", self.key, e);
        }
    }

    fn try_load(&self) -> InventoryResult<Vec<Item>> {
        match self.slot.read(&self.key)? {
            Some(raw) => {
                let entries: Vec<Value> = serde_json::from_str(&raw)?;
                let rows = entries
                    .into_iter()
                    .filter_map(|entry| match serde_json::from_value::<RemoteRow>(entry) {
                        Ok(row) => Some(row),
                        Err(e) => {
                            warn!("snapshot '{}': skipping malformed entry: {}", self.key, e);
                            None
                        }
                    })
                    .collect();
                Ok(normalize_rows(rows))
            }
            None => Ok(Vec::new()),
        }
    }

    fn try_save(&self, items: &[Item]) -> InventoryResult<()> {
        let raw = serde_json::to_string(items)?;
        self.slot.write(&self.key, &raw)
    }
}
