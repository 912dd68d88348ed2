// ABOUTME: Browser push subscription storage
// ABOUTME: Subscriptions are keyed by endpoint URL for unsubscription

pub mod storage;
pub mod types;

pub use storage::PushStorage;
pub use types::{PushKeys, PushSubscription, SubscribeInput};
