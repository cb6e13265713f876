//! Domain Layer
//!
//! Inventory entities, the fixed location registry and identifier generation.
//! This layer does no I/O (except serde for serialization).

mod id;
mod item;
mod location;

pub use id::{generate_id, ID_LEN};
pub use item::{Item, ItemDraft};
pub use location::{lookup, Location, LocationFilter, LocationTab, LOCATION_TABS};
