// ABOUTME: SQLite persistence for push subscriptions
// ABOUTME: Unsubscribe removes every row matching the endpoint, missing is fine

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use pantry_storage::StorageResult;

use crate::types::{PushSubscription, SubscribeInput};

#[derive(Clone)]
pub struct PushStorage {
    pool: SqlitePool,
}

impl PushStorage {
    pub fn new(pool: SqlitePool) -> Self {
        PushStorage { pool }
    }

    pub async fn subscribe(&self, input: SubscribeInput) -> StorageResult<PushSubscription> {
        let subscription = PushSubscription::from_input(input);
        let keys = serde_json::to_string(&subscription.keys)?;
        debug!("Saving push subscription {}", subscription.id);

        sqlx::query(
            "INSERT INTO push_subscriptions (id, endpoint, keys, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&subscription.id)
        .bind(&subscription.endpoint)
        .bind(&keys)
        .bind(subscription.created_at)
        .execute(&self.pool)
        .await?;

        Ok(subscription)
    }

    /// Remove all subscriptions for an endpoint. Unsubscribing an unknown
    /// endpoint is not an error.
    pub async fn unsubscribe(&self, endpoint: &str) -> StorageResult<()> {
        sqlx::query("DELETE FROM push_subscriptions WHERE endpoint = ?")
            .bind(endpoint)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list(&self) -> StorageResult<Vec<PushSubscription>> {
        let rows = sqlx::query("SELECT * FROM push_subscriptions ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                let keys: String = row.get("keys");
                Ok(PushSubscription {
                    id: row.get("id"),
                    endpoint: row.get("endpoint"),
                    keys: serde_json::from_str(&keys)?,
                    created_at: row.get::<DateTime<Utc>, _>("created_at"),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PushKeys;
    use pantry_storage::test_pool;

    fn input(endpoint: &str) -> SubscribeInput {
        SubscribeInput {
            endpoint: endpoint.to_string(),
            keys: PushKeys {
                p256dh: "BPubKey".to_string(),
                auth: "authSecret".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn subscribe_and_list_round_trip() {
        let storage = PushStorage::new(test_pool().await);
        let created = storage.subscribe(input("https://push.example/ep1")).await.unwrap();
        assert!(created.id.starts_with("sub-"));

        let all = storage.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].endpoint, "https://push.example/ep1");
        assert_eq!(all[0].keys.p256dh, "BPubKey");
    }

    #[tokio::test]
    async fn unsubscribe_removes_matching_endpoint() {
        let storage = PushStorage::new(test_pool().await);
        storage.subscribe(input("https://push.example/ep1")).await.unwrap();
        storage.subscribe(input("https://push.example/ep2")).await.unwrap();

        storage.unsubscribe("https://push.example/ep1").await.unwrap();

        let all = storage.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].endpoint, "https://push.example/ep2");
    }

    #[tokio::test]
    async fn unsubscribe_unknown_endpoint_is_ok() {
        let storage = PushStorage::new(test_pool().await);
        storage.unsubscribe("https://push.example/none").await.unwrap();
    }
}
