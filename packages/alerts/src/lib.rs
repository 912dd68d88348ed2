// ABOUTME: Price alerts: types, SQLite persistence, and the background sweep
// ABOUTME: Sweeps compare target prices against the catalogue's current best price

pub mod checker;
pub mod storage;
pub mod types;

pub use checker::check_alerts_and_notify;
pub use storage::AlertStorage;
pub use types::{AlertCreateInput, PriceAlert};
