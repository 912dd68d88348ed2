// ABOUTME: The fixed set of retailers and product categories
// ABOUTME: StoreKey is a closed enum; unknown keys are rejected at parse time

use serde::{Deserialize, Serialize};

/// The five retailers tracked by the catalogue.
///
/// Declaration order is the canonical iteration order used everywhere a
/// deterministic store order matters (totals tie-breaks, JSON output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKey {
    Coles,
    Woolworths,
    Aldi,
    Iga,
    Costco,
}

impl StoreKey {
    pub const ALL: [StoreKey; 5] = [
        StoreKey::Coles,
        StoreKey::Woolworths,
        StoreKey::Aldi,
        StoreKey::Iga,
        StoreKey::Costco,
    ];

    /// Lowercase wire key, matching the JSON field names of `StorePrices`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Coles => "coles",
            StoreKey::Woolworths => "woolworths",
            StoreKey::Aldi => "aldi",
            StoreKey::Iga => "iga",
            StoreKey::Costco => "costco",
        }
    }

    /// Human-readable retailer name, used in alert emails and store listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            StoreKey::Coles => "Coles",
            StoreKey::Woolworths => "Woolworths",
            StoreKey::Aldi => "Aldi",
            StoreKey::Iga => "IGA",
            StoreKey::Costco => "Costco",
        }
    }

    /// Parse a wire key. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<StoreKey> {
        match s {
            "coles" => Some(StoreKey::Coles),
            "woolworths" => Some(StoreKey::Woolworths),
            "aldi" => Some(StoreKey::Aldi),
            "iga" => Some(StoreKey::Iga),
            "costco" => Some(StoreKey::Costco),
            _ => None,
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a store, served by `GET /api/stores`.
#[derive(Debug, Clone, Serialize)]
pub struct StoreInfo {
    pub key: StoreKey,
    pub name: &'static str,
    pub color: &'static str,
    pub url: &'static str,
}

impl StoreInfo {
    pub fn all() -> Vec<StoreInfo> {
        StoreKey::ALL
            .iter()
            .map(|&key| StoreInfo {
                key,
                name: key.display_name(),
                color: match key {
                    StoreKey::Coles => "#E01A22",
                    StoreKey::Woolworths => "#178841",
                    StoreKey::Aldi => "#001E79",
                    StoreKey::Iga => "#DA291C",
                    StoreKey::Costco => "#005DAA",
                },
                url: match key {
                    StoreKey::Coles => "https://www.coles.com.au",
                    StoreKey::Woolworths => "https://www.woolworths.com.au",
                    StoreKey::Aldi => "https://www.aldi.com.au",
                    StoreKey::Iga => "https://www.iga.com.au",
                    StoreKey::Costco => "https://www.costco.com.au",
                },
            })
            .collect()
    }
}

/// The closed set of product categories. Category filters match these
/// strings exactly (case-sensitive).
pub const CATEGORIES: [&str; 10] = [
    "Fruit & Veg",
    "Dairy & Eggs",
    "Meat & Seafood",
    "Bakery",
    "Pantry",
    "Frozen",
    "Beverages",
    "Snacks",
    "Household",
    "Personal Care",
];
