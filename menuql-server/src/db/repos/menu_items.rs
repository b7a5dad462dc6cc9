//! Menu item repository
//!
//! Handles menu item CRUD with proper patterns:
//! - create/delete: one transaction each, committed only on success
//! - list: items plus all their reviews in two queries (no N+1)

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

use super::{DbError, Review};
use crate::models::{MenuItemLookup, RecordId};

/// Menu item record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub rating: Option<i32>,
}

/// Menu item with its reviews attached
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemWithReviews {
    pub item: MenuItem,
    pub reviews: Vec<Review>,
}

/// Fields accepted when creating a menu item.
///
/// `category` is deliberately absent: nothing sets it through the API.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub price: Option<f64>,
    pub rating: Option<i32>,
}

/// Menu item repository
pub struct MenuItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MenuItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a menu item and return it with its generated id.
    pub async fn create(&self, item: NewMenuItem) -> Result<MenuItem, DbError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let created: MenuItem = sqlx::query_as(
            r#"
            INSERT INTO menuItems (name, price, rating, createdAt, updatedAt)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, price, category, rating
            "#,
        )
        .bind(&item.name)
        .bind(item.price)
        .bind(item.rating)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// All menu items, oldest first, each with its reviews.
    pub async fn list_with_reviews(&self) -> Result<Vec<MenuItemWithReviews>, DbError> {
        let items: Vec<MenuItem> = sqlx::query_as(
            "SELECT id, name, price, category, rating FROM menuItems ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        let reviews: Vec<Review> = sqlx::query_as(
            r#"
            SELECT r.id, r.comment, r.authorId, r.menuItemId
            FROM reviews r
            JOIN menuItems m ON m.id = r.menuItemId
            ORDER BY r.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let mut by_item: HashMap<i64, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_item.entry(review.menu_item_id).or_default().push(review);
        }

        Ok(items
            .into_iter()
            .map(|item| MenuItemWithReviews {
                reviews: by_item.remove(&item.id).unwrap_or_default(),
                item,
            })
            .collect())
    }

    /// Get a menu item by id, `None` if it does not exist.
    pub async fn get(&self, id: RecordId) -> Result<Option<MenuItem>, DbError> {
        let item = sqlx::query_as(
            "SELECT id, name, price, category, rating FROM menuItems WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    /// First menu item (lowest id) whose name matches exactly.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, DbError> {
        // SQLite's `=` on TEXT is case-sensitive (BINARY collation)
        let item = sqlx::query_as(
            r#"
            SELECT id, name, price, category, rating
            FROM menuItems
            WHERE name = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    pub async fn find(&self, lookup: &MenuItemLookup) -> Result<Option<MenuItem>, DbError> {
        match lookup {
            MenuItemLookup::ById(id) => self.get(*id).await,
            MenuItemLookup::ByName(name) => self.find_by_name(name).await,
        }
    }

    /// Delete a menu item, returning its last stored values.
    ///
    /// Reviews pointing at the item are left in place.
    pub async fn delete(&self, id: RecordId) -> Result<MenuItem, DbError> {
        let mut tx = self.pool.begin().await?;

        let item: MenuItem = sqlx::query_as(
            "SELECT id, name, price, category, rating FROM menuItems WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "menu item",
            id: id.to_string(),
        })?;

        sqlx::query("DELETE FROM menuItems WHERE id = ?")
            .bind(id.get())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(menu_item_id = item.id, "Menu item deleted");
        Ok(item)
    }
}
