// ABOUTME: Product, price entry, and price history types
// ABOUTME: StorePrices holds exactly one entry per retailer and resolves best prices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stores::StoreKey;

/// A single store's price for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub price: f64,
    pub available: bool,
    pub on_special: bool,
}

impl Default for PriceEntry {
    fn default() -> Self {
        // A missing entry means the store does not stock the product.
        PriceEntry {
            price: 0.0,
            available: false,
            on_special: false,
        }
    }
}

/// Per-store prices for a product: exactly one entry per retailer.
///
/// Fields default when deserializing, so a partial snapshot from a client
/// (e.g. a shopping-list item) still satisfies the one-entry-per-store
/// invariant with the missing stores marked unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorePrices {
    #[serde(default)]
    pub coles: PriceEntry,
    #[serde(default)]
    pub woolworths: PriceEntry,
    #[serde(default)]
    pub aldi: PriceEntry,
    #[serde(default)]
    pub iga: PriceEntry,
    #[serde(default)]
    pub costco: PriceEntry,
}

impl StorePrices {
    pub fn get(&self, store: StoreKey) -> &PriceEntry {
        match store {
            StoreKey::Coles => &self.coles,
            StoreKey::Woolworths => &self.woolworths,
            StoreKey::Aldi => &self.aldi,
            StoreKey::Iga => &self.iga,
            StoreKey::Costco => &self.costco,
        }
    }

    pub fn get_mut(&mut self, store: StoreKey) -> &mut PriceEntry {
        match store {
            StoreKey::Coles => &mut self.coles,
            StoreKey::Woolworths => &mut self.woolworths,
            StoreKey::Aldi => &mut self.aldi,
            StoreKey::Iga => &mut self.iga,
            StoreKey::Costco => &mut self.costco,
        }
    }

    /// Iterate entries in canonical store order.
    pub fn iter(&self) -> impl Iterator<Item = (StoreKey, &PriceEntry)> {
        StoreKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }

    /// The minimum price among available, positive-priced entries.
    ///
    /// Returns `None` when no store has the product available at a positive
    /// price; callers must treat that as unorderable-high (it sorts last and
    /// never satisfies an upper price bound).
    pub fn best_price(&self) -> Option<f64> {
        let mut best: Option<f64> = None;
        for (_, entry) in self.iter() {
            if entry.available && entry.price > 0.0 {
                match best {
                    Some(current) if entry.price >= current => {}
                    _ => best = Some(entry.price),
                }
            }
        }
        best
    }

    /// The cheapest available store and its price.
    ///
    /// Comparison is strictly `<`, so on a tie the first store in canonical
    /// order keeps priority.
    pub fn best_store(&self) -> Option<(StoreKey, f64)> {
        let mut best: Option<(StoreKey, f64)> = None;
        for (store, entry) in self.iter() {
            if entry.available && entry.price > 0.0 {
                match best {
                    Some((_, current)) if entry.price >= current => {}
                    _ => best = Some((store, entry.price)),
                }
            }
        }
        best
    }

    /// True if any store currently lists the product on special.
    pub fn any_on_special(&self) -> bool {
        self.iter().any(|(_, entry)| entry.on_special)
    }
}

/// One day of price history for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Calendar date, formatted `YYYY-MM-DD`.
    pub date: String,
    pub price: f64,
    pub was_on_sale: bool,
}

/// A catalogue product. Created once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub size: String,
    pub unit: String,
    pub image: String,
    pub store_prices: StorePrices,
    /// Trailing 30 days plus today, oldest first (31 entries).
    pub price_history: Vec<HistoryPoint>,
    pub created_at: DateTime<Utc>,
    pub source: String,
}
