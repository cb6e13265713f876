//! Item Entity
//!
//! One pantry record. Items are created once, then only their quantity
//! changes; a quantity of zero is how an item is "used up".

use serde::{Deserialize, Serialize};

use super::location::Location;

/// An inventory item as held in memory and in the local snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque id, unique within the collection
    pub id: String,
    /// Trimmed, non-empty name
    pub name: String,
    pub location: Location,
    pub quantity: u32,
    /// Free-form, usually "YYYY-MM". Empty means unset.
    #[serde(default)]
    pub purchase_date: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Location, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            quantity,
            purchase_date: String::new(),
        }
    }

    pub fn with_purchase_date(mut self, purchase_date: impl Into<String>) -> Self {
        self.purchase_date = purchase_date.into();
        self
    }

    pub fn has_purchase_date(&self) -> bool {
        !self.purchase_date.is_empty()
    }

    /// Apply a signed delta, clamping at zero. Returns the new quantity.
    pub fn adjust(&mut self, delta: i64) -> u32 {
        let next = i64::from(self.quantity).saturating_add(delta).clamp(0, i64::from(u32::MAX));
        self.quantity = next as u32;
        self.quantity
    }
}

/// Candidate for a new item, as entered in the creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub location: Location,
    pub quantity: i64,
    pub purchase_date: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
            quantity: 1,
            purchase_date: String::new(),
        }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_purchase_date(mut self, purchase_date: impl Into<String>) -> Self {
        self.purchase_date = purchase_date.into();
        self
    }

    /// A draft is accepted when its trimmed name is non-empty and quantity >= 1
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.quantity > 0
    }

    /// Turn a valid draft into an item with the given id
    pub fn into_item(self, id: String) -> Option<Item> {
        if !self.is_valid() {
            return None;
        }
        let quantity = u32::try_from(self.quantity).unwrap_or(u32::MAX);
        Some(Item {
            id,
            name: self.name.trim().to_string(),
            location: self.location,
            quantity,
            purchase_date: self.purchase_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut item = Item::new("a1", "Rice", Location::PantryIn, 2);
        assert_eq!(item.adjust(-5), 0);
        assert_eq!(item.adjust(3), 3);
        assert_eq!(item.adjust(i64::MIN), 0);
        assert_eq!(item.adjust(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_draft_validation() {
        assert!(ItemDraft::new("Beans", Location::PantryIn).is_valid());
        assert!(!ItemDraft::new("   ", Location::PantryIn).is_valid());
        assert!(!ItemDraft::new("Beans", Location::PantryIn).with_quantity(0).is_valid());
        assert!(!ItemDraft::new("Beans", Location::PantryIn).with_quantity(-2).is_valid());
    }

    #[test]
    fn test_draft_into_item_trims_name() {
        let item = ItemDraft::new("  Canned Beans ", Location::PantryIn)
            .with_quantity(3)
            .with_purchase_date("2024-06")
            .into_item("abc1234".to_string())
            .unwrap();
        assert_eq!(item.name, "Canned Beans");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.purchase_date, "2024-06");
        assert_eq!(item.id, "abc1234");
    }

    #[test]
    fn test_snapshot_shape_is_camel_case() {
        let item = Item::new("x1", "Peas", Location::FreezerIn, 4).with_purchase_date("2024-01");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "x1",
                "name": "Peas",
                "location": "FreezerIn",
                "quantity": 4,
                "purchaseDate": "2024-01"
            })
        );
    }

    #[test]
    fn test_missing_purchase_date_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id":"x","name":"Peas","location":"FridgeOut","quantity":1}"#).unwrap();
        assert!(!item.has_purchase_date());
    }
}
