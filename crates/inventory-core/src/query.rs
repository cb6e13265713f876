//! Query Engine
//!
//! Derives the visible list from the collection and the current filter
//! state. Pure and cheap: callers recompute on every change instead of
//! caching.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use log::warn;

use crate::domain::{Item, LocationFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "A-Z",
            SortOrder::Descending => "Z-A",
        }
    }
}

/// Filter state driving the visible list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemQuery {
    pub location: LocationFilter,
    pub search: String,
    pub sort: SortOrder,
}

impl ItemQuery {
    pub fn new(location: LocationFilter) -> Self {
        Self { location, ..Self::default() }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Location filter, then text filter, then a stable sort by name
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        let mut visible = filter_by_location(items, self.location);
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            visible.retain(|item| matches_search(item, &needle));
        }
        sort_by_name(&mut visible, self.sort);
        visible
    }
}

/// Items at `filter`; `All` keeps everything in its original order
pub fn filter_by_location(items: &[Item], filter: LocationFilter) -> Vec<Item> {
    items.iter().filter(|item| filter.matches(item.location)).cloned().collect()
}

/// Case-insensitive substring match on name or purchase date.
/// `needle` must already be lower-cased.
pub fn matches_search(item: &Item, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle) || item.purchase_date.to_lowercase().contains(needle)
}

/// Locale-aware name ordering using the root collation: accents and case
/// only break ties, and lower case sorts before upper case.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!("collator unavailable, sorting by case-folded name: {}", e);
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            // reversed raw tie-break puts lower case first
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable sort; equal names keep their relative order in both directions
pub fn sort_by_name(items: &mut [Item], order: SortOrder) {
    let names = NameCollator::new();
    match order {
        SortOrder::Ascending => items.sort_by(|a, b| names.compare(&a.name, &b.name)),
        SortOrder::Descending => items.sort_by(|a, b| names.compare(&b.name, &a.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    fn pantry() -> Vec<Item> {
        vec![
            Item::new("1", "rice", Location::PantryIn, 2),
            Item::new("2", "Canned Beans", Location::PantryIn, 3).with_purchase_date("2024-06"),
            Item::new("3", "Peas", Location::FreezerIn, 1).with_purchase_date("2024-06"),
            Item::new("4", "Butter", Location::FridgeOut, 0).with_purchase_date("2023-11"),
            Item::new("5", "apples", Location::PantryOut, 6),
        ]
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_all_filter_is_identity() {
        assert_eq!(filter_by_location(&pantry(), LocationFilter::All), pantry());
        assert!(filter_by_location(&[], LocationFilter::All).is_empty());
    }

    #[test]
    fn test_location_filter() {
        let visible = ItemQuery::new(Location::PantryIn.into()).apply(&pantry());
        assert_eq!(names(&visible), vec!["Canned Beans", "rice"]);
    }

    #[test]
    fn test_search_matches_purchase_date() {
        let visible = ItemQuery::default().with_search("2024-06").apply(&pantry());
        assert_eq!(names(&visible), vec!["Canned Beans", "Peas"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let visible = ItemQuery::default().with_search("BEAN").apply(&pantry());
        assert_eq!(names(&visible), vec!["Canned Beans"]);
    }

    #[test]
    fn test_search_combines_with_location() {
        let visible = ItemQuery::new(Location::FreezerIn.into()).with_search("2024").apply(&pantry());
        assert_eq!(names(&visible), vec!["Peas"]);
    }

    #[test]
    fn test_sort_ignores_case() {
        let visible = ItemQuery::default().apply(&pantry());
        assert_eq!(names(&visible), vec!["apples", "Butter", "Canned Beans", "Peas", "rice"]);

        let visible = ItemQuery::default().with_sort(SortOrder::Descending).apply(&pantry());
        assert_eq!(names(&visible), vec!["rice", "Peas", "Canned Beans", "Butter", "apples"]);
    }

    #[test]
    fn test_sort_is_locale_aware() {
        let items = vec![
            Item::new("1", "Zucchini", Location::FridgeOut, 1),
            Item::new("2", "Éclair", Location::FreezerIn, 1),
            Item::new("3", "Apple", Location::PantryOut, 1),
            Item::new("4", "apple", Location::PantryOut, 1),
        ];
        let visible = ItemQuery::default().apply(&items);
        assert_eq!(names(&visible), vec!["apple", "Apple", "Éclair", "Zucchini"]);

        let visible = ItemQuery::default().with_sort(SortOrder::Descending).apply(&items);
        assert_eq!(names(&visible), vec!["Zucchini", "Éclair", "Apple", "apple"]);
    }

    #[test]
    fn test_collator_orders_accents_within_letter() {
        let names = NameCollator::new();
        assert_eq!(names.compare("éclair", "eggs"), Ordering::Less);
        assert_eq!(names.compare("Milk", "Milk"), Ordering::Equal);
    }

    #[test]
    fn test_reversed_ascending_equals_descending() {
        let mut ascending = ItemQuery::default().apply(&pantry());
        ascending.reverse();
        let descending = ItemQuery::default().with_sort(SortOrder::Descending).apply(&pantry());
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let items = vec![
            Item::new("a", "Milk", Location::FridgeOut, 1),
            Item::new("b", "Milk", Location::FridgeOut, 2),
        ];
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let visible = ItemQuery::default().with_sort(order).apply(&items);
            assert_eq!(visible[0].id, "a");
            assert_eq!(visible[1].id, "b");
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let query = ItemQuery::new(LocationFilter::All).with_search("a");
        assert_eq!(query.apply(&pantry()), query.apply(&pantry()));
    }

    #[test]
    fn test_sort_order_labels() {
        assert_eq!(SortOrder::default().label(), "A-Z");
        assert_eq!(SortOrder::default().toggle().label(), "Z-A");
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }
}
