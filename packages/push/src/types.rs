// ABOUTME: Push subscription records as delivered by the browser Push API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Encryption keys from the browser's PushSubscription object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushKeys {
    pub p256dh: String,
    pub auth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushSubscription {
    pub id: String,
    pub endpoint: String,
    pub keys: PushKeys,
    pub created_at: DateTime<Utc>,
}

/// Client payload for /push/subscribe.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeInput {
    pub endpoint: String,
    pub keys: PushKeys,
}

impl PushSubscription {
    pub fn from_input(input: SubscribeInput) -> Self {
        PushSubscription {
            id: format!("sub-{}", nanoid::nanoid!()),
            endpoint: input.endpoint,
            keys: input.keys,
            created_at: Utc::now(),
        }
    }
}
