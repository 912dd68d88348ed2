// ABOUTME: SQLite persistence for price alerts
// ABOUTME: mark_triggered is a conditional write so concurrent sweeps stay safe

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use pantry_storage::{StorageError, StorageResult};

use crate::types::{AlertCreateInput, PriceAlert};

const LIST_LIMIT: i64 = 100;

#[derive(Clone)]
pub struct AlertStorage {
    pool: SqlitePool,
}

impl AlertStorage {
    pub fn new(pool: SqlitePool) -> Self {
        AlertStorage { pool }
    }

    pub async fn create(&self, input: AlertCreateInput) -> StorageResult<PriceAlert> {
        let alert = PriceAlert::from_input(input);
        debug!("Creating price alert {} for {}", alert.id, alert.product_id);

        sqlx::query(
            "INSERT INTO price_alerts
                 (id, product_id, product_name, target_price, current_best_price,
                  email, triggered, created_at, triggered_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&alert.id)
        .bind(&alert.product_id)
        .bind(&alert.product_name)
        .bind(alert.target_price)
        .bind(alert.current_best_price)
        .bind(&alert.email)
        .bind(alert.triggered)
        .bind(alert.created_at)
        .bind(alert.triggered_at)
        .execute(&self.pool)
        .await?;

        Ok(alert)
    }

    /// All alerts, optionally narrowed to one product.
    pub async fn list(&self, product_id: Option<&str>) -> StorageResult<Vec<PriceAlert>> {
        let rows = match product_id {
            Some(product_id) => {
                sqlx::query(
                    "SELECT * FROM price_alerts WHERE product_id = ?
                     ORDER BY created_at LIMIT ?",
                )
                .bind(product_id)
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query("SELECT * FROM price_alerts ORDER BY created_at LIMIT ?")
                    .bind(LIST_LIMIT)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.iter().map(row_to_alert).collect()
    }

    /// Alerts the sweep still has to consider.
    pub async fn list_untriggered(&self) -> StorageResult<Vec<PriceAlert>> {
        let rows = sqlx::query(
            "SELECT * FROM price_alerts WHERE triggered = 0
             ORDER BY created_at LIMIT ?",
        )
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_alert).collect()
    }

    /// Flip an alert to triggered. Only untriggered rows are touched, so
    /// a second racing sweep is a no-op.
    pub async fn mark_triggered(&self, id: &str) -> StorageResult<()> {
        sqlx::query(
            "UPDATE price_alerts SET triggered = 1, triggered_at = ?
             WHERE id = ? AND triggered = 0",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM price_alerts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        debug!("Deleted price alert {}", id);
        Ok(())
    }
}

fn row_to_alert(row: &sqlx::sqlite::SqliteRow) -> StorageResult<PriceAlert> {
    Ok(PriceAlert {
        id: row.get("id"),
        product_id: row.get("product_id"),
        product_name: row.get("product_name"),
        target_price: row.get("target_price"),
        current_best_price: row.get("current_best_price"),
        email: row.get("email"),
        triggered: row.get("triggered"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
        triggered_at: row.get::<Option<DateTime<Utc>>, _>("triggered_at"),
    })
}
