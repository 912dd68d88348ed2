// ABOUTME: Data layer and persistence for PricePantry
// ABOUTME: SQLite pool management, shared storage errors, and the usage counter

pub mod db;
pub mod usage;

use thiserror::Error;

pub use db::{connect, default_db_path, test_pool};
pub use usage::{ApiUsage, ApiUsageSnapshot};

/// Storage errors shared by every collection.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Not found")]
    NotFound,
}

pub type StorageResult<T> = Result<T, StorageError>;
