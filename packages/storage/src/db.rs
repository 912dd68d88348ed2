// ABOUTME: Database connection management and migration running
// ABOUTME: Provides the shared SQLite pool used by all storage structs

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::{StorageError, StorageResult};

/// Default on-disk database location (`~/.pantry/pantry.db`).
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pantry")
        .join("pantry.db")
}

/// Open the SQLite pool, apply pragmas, and run embedded migrations.
pub async fn connect(database_path: Option<PathBuf>) -> StorageResult<SqlitePool> {
    let database_path = database_path.unwrap_or_else(default_db_path);

    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
    }

    let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
    debug!("Connecting to database: {}", database_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&database_url)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(StorageError::Migration)?;

    debug!("Database migrations completed");

    Ok(pool)
}

/// In-memory pool with the schema applied, for tests.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    let migration_sql = include_str!("../migrations/001_initial_schema.sql");
    sqlx::raw_sql(migration_sql)
        .execute(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
