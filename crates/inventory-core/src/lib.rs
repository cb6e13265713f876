//! Inventory Core
//!
//! Everything behind the Gaba Inventory screens except rendering:
//! - domain: items, the location registry and identifier generation
//! - repository: the local snapshot cache and its storage slots
//! - sync: wire mapping and the HTTP client for the spreadsheet endpoint
//! - store: the in-memory inventory and its load/mutate/persist lifecycle
//! - query: the pure filter + sort that produces the visible list
//! - view: small presentation rules shared with the UI
//!
//! The store is driven from a single thread of control. Mutations are
//! applied locally first and hand back a [`SyncRequest`] that the caller
//! sends whenever it likes; the outcome is fed back through
//! [`Inventory::settle`].

pub mod config;
pub mod domain;
pub mod error;
pub mod query;
pub mod repository;
pub mod store;
pub mod sync;
pub mod view;

pub use config::SyncConfig;
pub use domain::{generate_id, Item, ItemDraft, Location, LocationFilter, LocationTab, LOCATION_TABS};
pub use error::{InventoryError, InventoryResult};
pub use query::{ItemQuery, NameCollator, SortOrder};
pub use repository::{MemorySlot, Snapshot, SnapshotSlot, DEFAULT_SNAPSHOT_KEY};
pub use store::{Inventory, Phase, SyncKind, SyncOutcome, SyncRequest};
pub use sync::{HttpInventoryApi, InventoryApi, Offline, Remote, RemoteRow};
pub use view::{can_create, parse_quantity_input, EmptyState};
