//! UI Components
//!
//! Reusable Leptos components.

mod location_tab_bar;
mod search_bar;
mod inventory_list;
mod inventory_row;
mod new_item_form;

pub use location_tab_bar::LocationTabBar;
pub use search_bar::SearchBar;
pub use inventory_list::InventoryList;
pub use inventory_row::InventoryRow;
pub use new_item_form::NewItemForm;
