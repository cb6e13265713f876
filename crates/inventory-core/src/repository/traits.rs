//! Repository Layer - Slot Trait
//!
//! A slot is the shape of browser local storage: named string values.
//! Implementations can use localStorage, files, memory, etc.

use crate::error::InventoryResult;

/// Key/value storage holding serialized snapshots
pub trait SnapshotSlot {
    /// Read the value stored under `key`, `None` if nothing was saved yet
    fn read(&self, key: &str) -> InventoryResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> InventoryResult<()>;
}

impl<S: SnapshotSlot + ?Sized> SnapshotSlot for &S {
    fn read(&self, key: &str) -> InventoryResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> InventoryResult<()> {
        (**self).write(key, value)
    }
}
