//! Repository Layer
//!
//! The local snapshot cache: a raw key/value slot abstraction plus the
//! adapter that (de)serializes the whole collection into it.

mod traits;
mod snapshot;
mod memory_slot;

pub use traits::SnapshotSlot;
pub use snapshot::{Snapshot, DEFAULT_SNAPSHOT_KEY};
pub use memory_slot::MemorySlot;
