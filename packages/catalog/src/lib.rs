// ABOUTME: Product catalogue for PricePantry with per-store prices and history
// ABOUTME: Provides the in-memory catalogue, best-price resolution, and search

pub mod generator;
pub mod query;
pub mod stores;
pub mod types;

pub use generator::Catalog;
pub use query::{search, suggestions, SearchParams, SearchPage, SortBy, Suggestion};
pub use stores::{StoreInfo, StoreKey, CATEGORIES};
pub use types::{HistoryPoint, PriceEntry, Product, StorePrices};
