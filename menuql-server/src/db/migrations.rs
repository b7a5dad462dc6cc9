//! Storage sync: create tables for the declared models

use sqlx::SqlitePool;

use super::DbError;

/// Bring the store's structure in line with the menu item and review models.
///
/// Idempotent; safe to run on every startup. The relation from reviews to
/// menu items carries no REFERENCES clause, so orphaned reviews are allowed
/// and deleting a menu item never cascades.
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Synchronizing storage schema...");

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS menuItems (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            price REAL,
            category TEXT,
            rating INTEGER,
            createdAt TEXT NOT NULL,
            updatedAt TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            comment TEXT,
            authorId INTEGER,
            menuItemId INTEGER,
            createdAt TEXT NOT NULL,
            updatedAt TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_menu_item ON reviews(menuItemId)")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Storage schema synchronized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, DEFAULT_DATABASE_URL};

    #[tokio::test]
    async fn creates_both_tables() {
        let pool = create_pool(DEFAULT_DATABASE_URL).await.unwrap();
        run(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('menuItems', 'reviews') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["menuItems".to_string(), "reviews".to_string()]);
    }

    #[tokio::test]
    async fn is_idempotent() {
        let pool = create_pool(DEFAULT_DATABASE_URL).await.unwrap();
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();
    }
}
