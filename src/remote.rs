//! Remote Sync Wiring
//!
//! Builds the sync client from compile-time configuration and runs remote
//! calls in the background. Set `GABA_API_URL` when building to enable
//! online sync; without it the app works from localStorage only.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use inventory_core::{InventoryApi, Remote, SyncConfig, SyncRequest};

use crate::store::{AppStore, AppStateStoreFields};

/// Configuration baked in at build time
pub fn sync_config() -> SyncConfig {
    let config = SyncConfig::default();
    match option_env!("GABA_API_URL") {
        Some(url) => config.with_endpoint(url),
        None => config,
    }
}

thread_local! {
    static REMOTE: Rc<Remote> = Rc::new(Remote::from_config(&sync_config()));
}

/// The client every call goes through, built on first use
pub fn remote() -> Rc<Remote> {
    REMOTE.with(Rc::clone)
}

/// Send a request without blocking the caller; the outcome lands in the
/// store's advisory message when it resolves.
pub fn dispatch(store: AppStore, request: SyncRequest) {
    spawn_local(async move {
        let api = remote();
        let outcome = request.send(api.as_ref()).await;
        store.inventory().write().settle(outcome);
    });
}

/// Run the startup `list` once and move the store to Ready
pub fn load_inventory(store: AppStore) {
    spawn_local(async move {
        let api = remote();
        let listed = api.list().await;
        store.inventory().write().finish_loading(listed);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_is_built_once() {
        let first = remote();
        let second = remote();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.is_offline(), !sync_config().is_online());
    }
}
