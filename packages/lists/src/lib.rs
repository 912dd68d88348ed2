// ABOUTME: Shopping lists: types, SQLite persistence, and cross-store totals
// ABOUTME: Items carry a price snapshot taken when they were added

pub mod storage;
pub mod totals;
pub mod types;

pub use storage::ShoppingListStorage;
pub use totals::{compute_totals, ListTotals, StoreTotals};
pub use types::{ItemAddInput, ShoppingList, ShoppingListItem};
