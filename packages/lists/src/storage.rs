// ABOUTME: SQLite persistence for shopping lists and their items
// ABOUTME: Items are a child table; list deletion cascades through the FK

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use pantry_storage::{StorageError, StorageResult};

use crate::types::{ItemAddInput, ShoppingList, ShoppingListItem};

const LIST_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct ShoppingListStorage {
    pool: SqlitePool,
}

impl ShoppingListStorage {
    pub fn new(pool: SqlitePool) -> Self {
        ShoppingListStorage { pool }
    }

    pub async fn create(&self, name: String) -> StorageResult<ShoppingList> {
        let list = ShoppingList::new(name);
        debug!("Creating shopping list {}", list.id);

        sqlx::query(
            "INSERT INTO shopping_lists (id, name, created_at, updated_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&list.id)
        .bind(&list.name)
        .bind(list.created_at)
        .bind(list.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(list)
    }

    pub async fn list(&self) -> StorageResult<Vec<ShoppingList>> {
        let rows = sqlx::query(
            "SELECT * FROM shopping_lists ORDER BY created_at LIMIT ?",
        )
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        let mut lists = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.get("id");
            let items = self.items_for(&id).await?;
            lists.push(row_to_list(row, items)?);
        }
        Ok(lists)
    }

    pub async fn get(&self, list_id: &str) -> StorageResult<ShoppingList> {
        let row = sqlx::query("SELECT * FROM shopping_lists WHERE id = ?")
            .bind(list_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        let items = self.items_for(list_id).await?;
        row_to_list(&row, items)
    }

    /// Append an item and return the updated list.
    pub async fn add_item(
        &self,
        list_id: &str,
        input: ItemAddInput,
    ) -> StorageResult<ShoppingList> {
        // Existence check up front so a bad list id is a clean NotFound
        // instead of an FK violation.
        self.get(list_id).await?;

        let item = ShoppingListItem::from_input(input);
        let store_prices = serde_json::to_string(&item.store_prices)?;

        sqlx::query(
            "INSERT INTO shopping_list_items
                 (id, list_id, product_id, product_name, product_image,
                  quantity, store_prices, added_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&item.id)
        .bind(list_id)
        .bind(&item.product_id)
        .bind(&item.product_name)
        .bind(&item.product_image)
        .bind(item.quantity)
        .bind(&store_prices)
        .bind(item.added_at)
        .execute(&self.pool)
        .await?;

        self.touch(list_id).await?;
        self.get(list_id).await
    }

    pub async fn update_quantity(
        &self,
        list_id: &str,
        item_id: &str,
        quantity: i64,
    ) -> StorageResult<()> {
        let result = sqlx::query(
            "UPDATE shopping_list_items SET quantity = ?
             WHERE id = ? AND list_id = ?",
        )
        .bind(quantity)
        .bind(item_id)
        .bind(list_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        self.touch(list_id).await
    }

    pub async fn remove_item(&self, list_id: &str, item_id: &str) -> StorageResult<()> {
        let result = sqlx::query(
            "DELETE FROM shopping_list_items WHERE id = ? AND list_id = ?",
        )
        .bind(item_id)
        .bind(list_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        self.touch(list_id).await
    }

    pub async fn delete(&self, list_id: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM shopping_lists WHERE id = ?")
            .bind(list_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        debug!("Deleted shopping list {}", list_id);
        Ok(())
    }

    async fn items_for(&self, list_id: &str) -> StorageResult<Vec<ShoppingListItem>> {
        let rows = sqlx::query(
            "SELECT * FROM shopping_list_items WHERE list_id = ? ORDER BY rowid",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_item).collect()
    }

    async fn touch(&self, list_id: &str) -> StorageResult<()> {
        sqlx::query("UPDATE shopping_lists SET updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(list_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn row_to_list(
    row: &sqlx::sqlite::SqliteRow,
    items: Vec<ShoppingListItem>,
) -> StorageResult<ShoppingList> {
    Ok(ShoppingList {
        id: row.get("id"),
        name: row.get("name"),
        items,
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
        updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
    })
}

fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> StorageResult<ShoppingListItem> {
    let store_prices: String = row.get("store_prices");
    Ok(ShoppingListItem {
        id: row.get("id"),
        product_id: row.get("product_id"),
        product_name: row.get("product_name"),
        product_image: row.get("product_image"),
        quantity: row.get("quantity"),
        store_prices: serde_json::from_str(&store_prices)?,
        added_at: row.get::<DateTime<Utc>, _>("added_at"),
    })
}
