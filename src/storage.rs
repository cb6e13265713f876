//! Browser localStorage slot
//!
//! Looks the storage object up on every call so the slot itself stays a
//! plain `Send + Sync` value inside the reactive store.

use inventory_core::{InventoryError, InventoryResult, SnapshotSlot};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSlot;

impl LocalStorageSlot {
    fn storage() -> InventoryResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| InventoryError::storage("no window"))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| InventoryError::storage("localStorage unavailable"))
    }
}

fn js_error(err: JsValue) -> InventoryError {
    InventoryError::storage(format!("{:?}", err))
}

impl SnapshotSlot for LocalStorageSlot {
    fn read(&self, key: &str) -> InventoryResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> InventoryResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}
