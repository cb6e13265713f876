//! Inventory Store
//!
//! Owns the item collection. Two phases: `Loading` until the first remote
//! `list` settles (either way), then `Ready` for good.
//!
//! Mutations are optimistic. They change the collection, re-save the whole
//! snapshot, and hand back a [`SyncRequest`] for the caller to send. Nothing
//! here awaits the network while holding the store, so user actions are
//! never blocked behind a slow request. The [`SyncOutcome`] of each request
//! is fed to [`Inventory::settle`], which only ever touches the advisory
//! message: a failed remote write never rolls back the local change.

use log::{debug, warn};

use crate::domain::{generate_id, Item, ItemDraft};
use crate::error::{InventoryError, InventoryResult};
use crate::repository::{Snapshot, SnapshotSlot};
use crate::sync::{normalize_rows, InventoryApi, RemoteRow};

/// Advisory shown when the startup `list` fails
pub const LIST_FAILED: &str = "Online sync unavailable. Showing local data.";
/// Advisory shown when a remote `add` fails
pub const ADD_FAILED: &str = "Could not save online. Item saved locally.";
/// Advisory shown when a remote quantity update fails
pub const ADJUST_FAILED: &str = "Could not update online. Changes kept locally.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

/// Which remote call an outcome belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    List,
    Add,
    AdjustQuantity,
}

impl SyncKind {
    pub fn failure_advisory(self) -> &'static str {
        match self {
            SyncKind::List => LIST_FAILED,
            SyncKind::Add => ADD_FAILED,
            SyncKind::AdjustQuantity => ADJUST_FAILED,
        }
    }
}

/// A remote write the store wants mirrored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncRequest {
    Add(Item),
    AdjustQuantity { id: String, delta: i64 },
}

impl SyncRequest {
    pub fn kind(&self) -> SyncKind {
        match self {
            SyncRequest::Add(_) => SyncKind::Add,
            SyncRequest::AdjustQuantity { .. } => SyncKind::AdjustQuantity,
        }
    }

    /// Issue the call. Never fails: the error is carried in the outcome.
    pub async fn send<A: InventoryApi + ?Sized>(&self, api: &A) -> SyncOutcome {
        let result = match self {
            SyncRequest::Add(item) => api.add(item).await,
            SyncRequest::AdjustQuantity { id, delta } => api.update_quantity(id, *delta).await,
        };
        SyncOutcome::from_result(self.kind(), result)
    }
}

/// Result of one remote call, as consumed by [`Inventory::settle`]
#[derive(Debug)]
pub enum SyncOutcome {
    Synced(SyncKind),
    LocalOnly(SyncKind, InventoryError),
}

impl SyncOutcome {
    pub fn from_result(kind: SyncKind, result: InventoryResult<()>) -> Self {
        match result {
            Ok(()) => SyncOutcome::Synced(kind),
            Err(e) => SyncOutcome::LocalOnly(kind, e),
        }
    }

    pub fn kind(&self) -> SyncKind {
        match self {
            SyncOutcome::Synced(kind) | SyncOutcome::LocalOnly(kind, _) => *kind,
        }
    }

    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced(_))
    }
}

/// In-memory inventory mirrored to a local snapshot
#[derive(Debug, Clone)]
pub struct Inventory<S> {
    items: Vec<Item>,
    phase: Phase,
    advisory: Option<String>,
    snapshot: Snapshot<S>,
}

impl<S: SnapshotSlot> Inventory<S> {
    /// A store in the `Loading` phase with an empty collection
    pub fn new(snapshot: Snapshot<S>) -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Loading,
            advisory: None,
            snapshot,
        }
    }

    /// Create a store and run the whole startup sequence against `api`
    pub async fn bootstrap<A: InventoryApi + ?Sized>(api: &A, snapshot: Snapshot<S>) -> Self {
        let mut inventory = Self::new(snapshot);
        let listed = api.list().await;
        inventory.finish_loading(listed);
        inventory
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current advisory message, if sync is degraded
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn snapshot(&self) -> &Snapshot<S> {
        &self.snapshot
    }

    /// Settle the startup `list`: take the remote rows, or fall back to the
    /// local snapshot with an advisory. Only the first call has any effect.
    pub fn finish_loading(&mut self, listed: InventoryResult<Vec<RemoteRow>>) {
        if self.is_ready() {
            warn!("inventory already loaded; ignoring late list result");
            return;
        }
        match listed {
            Ok(rows) => {
                self.items = normalize_rows(rows);
                self.snapshot.save(&self.items);
                self.advisory = None;
                debug!("inventory ready with {} remote items", self.items.len());
            }
            Err(e) => {
                warn!("remote list failed, using local snapshot: {}", e);
                self.items = self.snapshot.load();
                self.advisory = Some(LIST_FAILED.to_string());
                debug!("inventory ready with {} local items", self.items.len());
            }
        }
        self.phase = Phase::Ready;
    }

    /// Add a new item from a draft. Returns `None` (and changes nothing) if
    /// the store is still loading or the draft is invalid.
    pub fn add_item(&mut self, draft: ItemDraft) -> Option<SyncRequest> {
        if !self.is_ready() {
            debug!("add_item ignored while loading");
            return None;
        }
        let item = draft.into_item(generate_id())?;
        debug!("add_item {} '{}' x{} in {}", item.id, item.name, item.quantity, item.location.key());
        self.items.push(item.clone());
        self.snapshot.save(&self.items);
        Some(SyncRequest::Add(item))
    }

    /// Change an item's quantity by `delta`, clamped at zero. Returns `None`
    /// if the store is still loading or no item has that id.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Option<SyncRequest> {
        if !self.is_ready() {
            debug!("adjust_quantity ignored while loading");
            return None;
        }
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        let quantity = item.adjust(delta);
        debug!("adjust_quantity {} by {} -> {}", id, delta, quantity);
        self.snapshot.save(&self.items);
        Some(SyncRequest::AdjustQuantity { id: id.to_string(), delta })
    }

    /// Record how a remote call went
    pub fn settle(&mut self, outcome: SyncOutcome) {
        match outcome {
            SyncOutcome::Synced(SyncKind::List | SyncKind::Add) => self.advisory = None,
            SyncOutcome::Synced(SyncKind::AdjustQuantity) => {}
            SyncOutcome::LocalOnly(kind, e) => {
                warn!("remote {:?} failed, kept locally: {}", kind, e);
                self.advisory = Some(kind.failure_advisory().to_string());
            }
        }
    }
}
