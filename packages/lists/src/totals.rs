// ABOUTME: Cross-store total aggregation for a shopping list
// ABOUTME: Sums available line prices per store and picks the cheapest nonzero store

use serde::Serialize;

use pantry_catalog::StoreKey;

use crate::types::ShoppingListItem;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running totals, one slot per store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StoreTotals {
    pub coles: f64,
    pub woolworths: f64,
    pub aldi: f64,
    pub iga: f64,
    pub costco: f64,
}

impl StoreTotals {
    pub fn get(&self, store: StoreKey) -> f64 {
        match store {
            StoreKey::Coles => self.coles,
            StoreKey::Woolworths => self.woolworths,
            StoreKey::Aldi => self.aldi,
            StoreKey::Iga => self.iga,
            StoreKey::Costco => self.costco,
        }
    }

    fn slot(&mut self, store: StoreKey) -> &mut f64 {
        match store {
            StoreKey::Coles => &mut self.coles,
            StoreKey::Woolworths => &mut self.woolworths,
            StoreKey::Aldi => &mut self.aldi,
            StoreKey::Iga => &mut self.iga,
            StoreKey::Costco => &mut self.costco,
        }
    }
}

/// Totals summary returned for a list.
#[derive(Debug, Clone, Serialize)]
pub struct ListTotals {
    pub item_count: usize,
    pub store_totals: StoreTotals,
    pub cheapest_store: Option<StoreKey>,
    pub cheapest_total: f64,
}

/// Sum each store's line totals across all items. A line counts toward a
/// store only when that store's snapshot entry is available with a positive
/// price. Stores with a zero total never win cheapest; ties go to the first
/// store in canonical order.
pub fn compute_totals(items: &[ShoppingListItem]) -> ListTotals {
    let mut totals = StoreTotals::default();

    for item in items {
        for (store, entry) in item.store_prices.iter() {
            if entry.available && entry.price > 0.0 {
                *totals.slot(store) += entry.price * item.quantity as f64;
            }
        }
    }

    for store in StoreKey::ALL {
        let slot = totals.slot(store);
        *slot = round2(*slot);
    }

    let mut cheapest: Option<(StoreKey, f64)> = None;
    for store in StoreKey::ALL {
        let total = totals.get(store);
        if total > 0.0 && cheapest.map_or(true, |(_, best)| total < best) {
            cheapest = Some((store, total));
        }
    }

    ListTotals {
        item_count: items.len(),
        store_totals: totals,
        cheapest_store: cheapest.map(|(store, _)| store),
        cheapest_total: cheapest.map(|(_, total)| total).unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pantry_catalog::{PriceEntry, StorePrices};
    use pretty_assertions::assert_eq;

    fn entry(price: f64, available: bool) -> PriceEntry {
        PriceEntry {
            price,
            available,
            on_special: false,
        }
    }

    fn item(quantity: i64, store_prices: StorePrices) -> ShoppingListItem {
        ShoppingListItem {
            id: "item-1".to_string(),
            product_id: "prod-1".to_string(),
            product_name: "Milk 2L".to_string(),
            product_image: String::new(),
            quantity,
            store_prices,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn single_item_quantity_multiplies() {
        let mut prices = StorePrices::default();
        prices.coles = entry(3.00, true);

        let totals = compute_totals(&[item(2, prices)]);
        assert_eq!(totals.store_totals.coles, 6.00);
        assert_eq!(totals.store_totals.woolworths, 0.0);
        assert_eq!(totals.cheapest_store, Some(StoreKey::Coles));
        assert_eq!(totals.cheapest_total, 6.00);
        assert_eq!(totals.item_count, 1);
    }

    #[test]
    fn unavailable_and_zero_entries_are_excluded() {
        let mut prices = StorePrices::default();
        prices.coles = entry(3.00, false);
        prices.aldi = entry(0.0, true);
        prices.iga = entry(4.20, true);

        let totals = compute_totals(&[item(1, prices)]);
        assert_eq!(totals.store_totals.coles, 0.0);
        assert_eq!(totals.store_totals.aldi, 0.0);
        assert_eq!(totals.store_totals.iga, 4.20);
        assert_eq!(totals.cheapest_store, Some(StoreKey::Iga));
    }

    #[test]
    fn cheapest_tie_goes_to_canonical_order() {
        let mut prices = StorePrices::default();
        prices.woolworths = entry(5.00, true);
        prices.aldi = entry(5.00, true);

        let totals = compute_totals(&[item(1, prices)]);
        assert_eq!(totals.cheapest_store, Some(StoreKey::Woolworths));
    }

    #[test]
    fn empty_list_has_no_cheapest_store() {
        let totals = compute_totals(&[]);
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.cheapest_store, None);
        assert_eq!(totals.cheapest_total, 0.0);
        assert_eq!(totals.store_totals, StoreTotals::default());
    }

    #[test]
    fn totals_accumulate_across_items() {
        let mut first = StorePrices::default();
        first.coles = entry(2.50, true);
        let mut second = StorePrices::default();
        second.coles = entry(1.25, true);

        let totals = compute_totals(&[item(2, first), item(1, second)]);
        assert_eq!(totals.store_totals.coles, 6.25);
    }

    #[test]
    fn totals_are_rounded_to_cents() {
        let mut prices = StorePrices::default();
        prices.coles = entry(1.105, true);

        let totals = compute_totals(&[item(3, prices)]);
        assert_eq!(totals.store_totals.coles, 3.32);
    }
}
