//! Database layer - connection pool, storage sync and repositories
//!
//! # Design Principles
//!
//! - One pool per process, reached only through [`Database`]
//! - List operations batch related rows - no N+1 queries
//! - Every write runs in its own transaction

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;

use sqlx::SqlitePool;

/// Storage accessor handed to every request.
///
/// Cheap to clone; clones share the underlying pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url` (the Connected state).
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = create_pool_with_options(database_url, max_connections).await?;
        tracing::info!(url = %database_url, "Database connected");
        Ok(Self::new(pool))
    }

    /// Open an ephemeral in-memory store and synchronize it.
    pub async fn in_memory() -> Result<Self, DbError> {
        let db = Self::connect(DEFAULT_DATABASE_URL, 1).await?;
        db.sync().await?;
        Ok(db)
    }

    /// Apply the table layout (the Synchronized state).
    pub async fn sync(&self) -> Result<(), DbError> {
        migrations::run(&self.pool).await
    }

    /// Round-trip a trivial query to prove the store is reachable.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn menu_items(&self) -> MenuItemRepo<'_> {
        MenuItemRepo::new(&self.pool)
    }

    pub fn reviews(&self) -> ReviewRepo<'_> {
        ReviewRepo::new(&self.pool)
    }
}
