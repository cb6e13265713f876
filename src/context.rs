//! Application Context
//!
//! Inventory actions provided via Leptos Context API. Components call these
//! for every mutation; none of them touch the store directly.

use leptos::prelude::*;
use inventory_core::{ItemDraft, LocationFilter};

use crate::remote;
use crate::store::{AppStore, AppStateStoreFields};

/// Mutation intents, applied locally first and then mirrored remotely
#[derive(Clone, Copy)]
pub struct InventoryActions {
    store: AppStore,
}

impl InventoryActions {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Add an item. Returns false if the draft was rejected.
    pub fn add_item(&self, draft: ItemDraft) -> bool {
        let request = self.store.inventory().write().add_item(draft);
        match request {
            Some(request) => {
                remote::dispatch(self.store, request);
                true
            }
            None => false,
        }
    }

    pub fn adjust_quantity(&self, id: &str, delta: i64) {
        let request = self.store.inventory().write().adjust_quantity(id, delta);
        if let Some(request) = request {
            remote::dispatch(self.store, request);
        }
    }

    pub fn select_tab(&self, filter: LocationFilter) {
        self.store.query().write().location = filter;
    }

    pub fn open_form(&self) {
        self.store.form_open().set(true);
    }

    pub fn close_form(&self) {
        self.store.form_open().set(false);
    }
}

/// Get the inventory actions from context
pub fn use_inventory_actions() -> InventoryActions {
    expect_context::<InventoryActions>()
}
