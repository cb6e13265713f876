//! Presentation rules shared with the UI: when the add control is shown,
//! what the creation form starts with, and which empty-state text to use.

use crate::domain::{ItemDraft, Location, LocationFilter};

/// Items can only be created from a concrete location tab
pub fn can_create(filter: LocationFilter) -> bool {
    filter.location().is_some()
}

impl ItemDraft {
    /// Blank form for the given tab; on `All` it falls back to the first
    /// concrete location.
    pub fn for_filter(filter: LocationFilter) -> Self {
        ItemDraft::new(String::new(), filter.location().unwrap_or(Location::ALL[0]))
    }
}

/// Read the quantity field the way a number input is read: leading integer,
/// and anything unparsable or zero becomes 1. Negative values are kept so
/// that validation rejects them.
pub fn parse_quantity_input(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[sign_len..].chars().take_while(char::is_ascii_digit).count();
    match trimmed[..sign_len + digits_len].parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

/// What to show when the visible list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    InventoryEmpty,
    NoneInLocation(Location),
}

impl EmptyState {
    pub const TITLE: &'static str = "No Items Found";

    pub fn for_filter(filter: LocationFilter) -> Self {
        match filter {
            LocationFilter::All => EmptyState::InventoryEmpty,
            LocationFilter::Only(location) => EmptyState::NoneInLocation(location),
        }
    }

    pub fn message(self) -> String {
        match self {
            EmptyState::InventoryEmpty => "Your inventory is currently empty.".to_string(),
            EmptyState::NoneInLocation(location) => format!("No items found in the {}.", location.display_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use crate::query::ItemQuery;

    #[test]
    fn test_can_create_only_on_concrete_tabs() {
        assert!(!can_create(LocationFilter::All));
        assert!(Location::ALL.into_iter().all(|loc| can_create(loc.into())));
    }

    #[test]
    fn test_form_defaults_to_active_tab() {
        assert_eq!(ItemDraft::for_filter(Location::FreezerOut.into()).location, Location::FreezerOut);
        assert_eq!(ItemDraft::for_filter(LocationFilter::All).location, Location::PantryIn);

        let draft = ItemDraft::for_filter(LocationFilter::All);
        assert_eq!(draft.quantity, 1);
        assert!(draft.name.is_empty());
        assert!(draft.purchase_date.is_empty());
    }

    #[test]
    fn test_empty_inventory_on_all_tab() {
        let items: Vec<Item> = Vec::new();
        let visible = ItemQuery::default().apply(&items);
        assert!(visible.is_empty());

        let state = EmptyState::for_filter(LocationFilter::All);
        assert_eq!(state, EmptyState::InventoryEmpty);
        assert_eq!(state.message(), "Your inventory is currently empty.");
    }

    #[test]
    fn test_empty_location_message() {
        let state = EmptyState::for_filter(Location::FridgeOut.into());
        assert_eq!(state.message(), "No items found in the Outside Fridge.");
    }

    #[test]
    fn test_parse_quantity_input() {
        assert_eq!(parse_quantity_input("3"), 3);
        assert_eq!(parse_quantity_input("12abc"), 12);
        assert_eq!(parse_quantity_input(""), 1);
        assert_eq!(parse_quantity_input("0"), 1);
        assert_eq!(parse_quantity_input("abc"), 1);
        assert_eq!(parse_quantity_input("-4"), -4);
    }
}
