// ABOUTME: Shopping list and list item records plus the add-item payload
// ABOUTME: store_prices is frozen at add-time, never refreshed from the catalogue

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_catalog::StorePrices;

fn default_quantity() -> i64 {
    1
}

/// One product line on a list. Quantity is at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub product_image: String,
    pub quantity: i64,
    pub store_prices: StorePrices,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    pub items: Vec<ShoppingListItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client payload for adding an item to a list.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemAddInput {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_image: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub store_prices: StorePrices,
}

impl ShoppingList {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        ShoppingList {
            id: format!("list-{}", nanoid::nanoid!()),
            name,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ShoppingListItem {
    pub fn from_input(input: ItemAddInput) -> Self {
        ShoppingListItem {
            id: format!("item-{}", nanoid::nanoid!()),
            product_id: input.product_id,
            product_name: input.product_name,
            product_image: input.product_image,
            quantity: input.quantity.max(1),
            store_prices: input.store_prices,
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_quantity_is_clamped_to_one() {
        let item = ShoppingListItem::from_input(ItemAddInput {
            product_id: "prod-1".to_string(),
            product_name: "Milk 2L".to_string(),
            product_image: String::new(),
            quantity: 0,
            store_prices: StorePrices::default(),
        });
        assert_eq!(item.quantity, 1);
        assert!(item.id.starts_with("item-"));
    }

    #[test]
    fn add_input_defaults_apply() {
        let input: ItemAddInput = serde_json::from_str(
            r#"{"product_id": "prod-1", "product_name": "Milk 2L"}"#,
        )
        .unwrap();
        assert_eq!(input.quantity, 1);
        assert_eq!(input.product_image, "");
    }
}
