//! Remote Sync
//!
//! Client side of the spreadsheet endpoint: the request/row shapes on the
//! wire and the [`InventoryApi`] implementations that speak them.

mod client;
mod wire;

pub use client::{HttpInventoryApi, InventoryApi, Offline, Remote};
pub use wire::{normalize_rows, AddRow, ApiRequest, RemoteRow};
