//! In-memory slot
//!
//! Used by tests and by embedders that do not want anything on disk.
//! Clones share the same entries, so a test can keep a handle and inspect
//! what the store wrote.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::SnapshotSlot;
use crate::error::{InventoryError, InventoryResult};

#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, e.g. a snapshot left by a previous session
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        self
    }

    /// Current raw value under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl SnapshotSlot for MemorySlot {
    fn read(&self, key: &str) -> InventoryResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| InventoryError::storage("memory slot poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> InventoryResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| InventoryError::storage("memory slot poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let slot = MemorySlot::new();
        let handle = slot.clone();
        slot.write("k", "v").unwrap();
        assert_eq!(handle.read("k").unwrap(), Some("v".to_string()));
        assert_eq!(handle.read("other").unwrap(), None);
    }
}
