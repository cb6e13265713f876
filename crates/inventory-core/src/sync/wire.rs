//! Wire Shapes
//!
//! The endpoint is a spreadsheet script, so rows come back loosely typed:
//! ids and quantities may be numbers or strings and optional columns may be
//! missing. Everything is normalized here; [`Item`] never sees wire names.
//!
//! Note the purchase-date column: rows are read as `purchaseDate` (with
//! `purchasedate` accepted too), but the `add` payload sends the lower-case
//! `purchasedate`, which is what the sheet script expects.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Item, Location};

/// POST body for a write. `list` is a GET with `?action=list` and has no
/// body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ApiRequest<'a> {
    Add { row: AddRow<'a> },
    UpdateQuantity { id: &'a str, delta: i64 },
}

/// Item as sent in an `add` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub location: Location,
    pub purchasedate: &'a str,
    pub quantity: u32,
}

impl<'a> From<&'a Item> for AddRow<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            location: item.location,
            purchasedate: &item.purchase_date,
            quantity: item.quantity,
        }
    }
}

/// Row as returned by `list`, raw columns preserved
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRow {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub location: Value,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default, alias = "purchasedate")]
    pub purchase_date: Value,
}

impl RemoteRow {
    /// Map to an [`Item`]. Rows without an id or a name, or with a location
    /// outside the registry, cannot be represented and yield `None`.
    pub fn into_item(self) -> Option<Item> {
        let id = text(&self.id);
        let name = text(&self.name).trim().to_string();
        if id.is_empty() || name.is_empty() {
            return None;
        }
        let location = Location::from_key(&text(&self.location))?;
        Some(Item {
            id,
            name,
            location,
            quantity: quantity(&self.quantity),
            purchase_date: text(&self.purchase_date),
        })
    }
}

/// Normalize loosely typed rows (a `list` response or a stored snapshot),
/// dropping the ones that cannot be represented
pub fn normalize_rows(rows: Vec<RemoteRow>) -> Vec<Item> {
    rows.into_iter()
        .filter_map(|row| {
            let raw = format!("{:?}/{:?}", row.id, row.location);
            let item = row.into_item();
            if item.is_none() {
                warn!("dropping row {} (missing id or name, or unknown location)", raw);
            }
            item
        })
        .collect()
}

fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn quantity(value: &Value) -> u32 {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    // `as` saturates: negatives and NaN become 0
    n.map_or(0, |n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_request_uses_lowercase_purchase_date() {
        let item = Item::new("abc1234", "Canned Beans", Location::PantryIn, 3).with_purchase_date("2024-06");
        let body = ApiRequest::Add { row: AddRow::from(&item) };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "action": "add",
                "row": {
                    "id": "abc1234",
                    "name": "Canned Beans",
                    "location": "PantryIn",
                    "purchasedate": "2024-06",
                    "quantity": 3
                }
            })
        );
    }

    #[test]
    fn test_update_quantity_request_shape() {
        let body = ApiRequest::UpdateQuantity { id: "abc1234", delta: -2 };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "action": "updateQuantity", "id": "abc1234", "delta": -2 })
        );
    }

    #[test]
    fn test_row_missing_optional_columns() {
        let row: RemoteRow = serde_json::from_value(json!({
            "id": "r1", "name": "Flour", "location": "PantryOut"
        }))
        .unwrap();
        let item = row.into_item().unwrap();
        assert_eq!(item.quantity, 0);
        assert_eq!(item.purchase_date, "");
    }

    #[test]
    fn test_row_with_sheet_typed_cells() {
        let rows: Vec<RemoteRow> = serde_json::from_value(json!([
            { "id": 42, "name": "Ice", "location": "FreezerOut", "quantity": "7", "purchaseDate": "2024-02" },
            { "id": "q", "name": "Milk", "location": "FridgeOut", "quantity": -3, "purchasedate": "2024-03" },
            { "id": "z", "name": "Jam", "location": "PantryIn", "quantity": "lots" }
        ]))
        .unwrap();
        let items = normalize_rows(rows);
        assert_eq!(items[0].id, "42");
        assert_eq!(items[0].quantity, 7);
        assert_eq!(items[0].purchase_date, "2024-02");
        assert_eq!(items[1].quantity, 0);
        assert_eq!(items[1].purchase_date, "2024-03");
        assert_eq!(items[2].quantity, 0);
    }

    #[test]
    fn test_unrepresentable_rows_are_dropped() {
        let rows: Vec<RemoteRow> = serde_json::from_value(json!([
            { "id": "a", "name": "Salt", "location": "Garage", "quantity": 1 },
            { "id": "b", "name": "Sugar", "location": "All", "quantity": 1 },
            { "name": "No Id", "location": "PantryIn", "quantity": 1 },
            { "id": "d", "location": "PantryIn", "quantity": 1 },
            { "id": "e", "name": "   ", "location": "PantryIn", "quantity": 1 },
            { "id": "c", "name": "Tea", "location": "PantryIn", "quantity": 2 }
        ]))
        .unwrap();
        let items = normalize_rows(rows);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tea");
    }

    #[test]
    fn test_row_name_is_trimmed() {
        let row: RemoteRow = serde_json::from_value(json!({
            "id": "t1", "name": "  Oats ", "location": "PantryIn", "quantity": 1
        }))
        .unwrap();
        assert_eq!(row.into_item().unwrap().name, "Oats");
    }
}
