//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use inventory_core::{Inventory, ItemQuery, Snapshot, SyncConfig};

use crate::storage::LocalStorageSlot;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Item collection, load phase and advisory message
    pub inventory: Inventory<LocalStorageSlot>,
    /// Active tab, search text and sort direction
    pub query: ItemQuery,
    /// Whether the add-item modal is open
    pub form_open: bool,
    /// Whether the search panel is collapsed
    pub search_minimized: bool,
}

impl AppState {
    pub fn new(config: &SyncConfig) -> Self {
        let snapshot = Snapshot::with_key(LocalStorageSlot, config.storage_key.clone());
        Self {
            inventory: Inventory::new(snapshot),
            query: ItemQuery::default(),
            form_open: false,
            search_minimized: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
