//! Review repository
//!
//! Reviews are write-once and only read through their menu item.

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::RecordId;

/// Review record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Review {
    pub id: i64,
    pub comment: String,
    #[sqlx(rename = "authorId")]
    pub author_id: i64,
    #[sqlx(rename = "menuItemId")]
    pub menu_item_id: i64,
}

/// Fields accepted when creating a review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub comment: String,
    pub author_id: RecordId,
    pub menu_item_id: RecordId,
}

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a review.
    ///
    /// The menu item id is stored as given; a reference to a missing item
    /// produces an orphaned review rather than an error.
    pub async fn create(&self, review: NewReview) -> Result<Review, DbError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let created: Review = sqlx::query_as(
            r#"
            INSERT INTO reviews (comment, authorId, menuItemId, createdAt, updatedAt)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, comment, authorId, menuItemId
            "#,
        )
        .bind(&review.comment)
        .bind(review.author_id.get())
        .bind(review.menu_item_id.get())
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            review_id = created.id,
            menu_item_id = created.menu_item_id,
            "Review created"
        );
        Ok(created)
    }

    /// Reviews attached to one menu item, oldest first.
    pub async fn list_for_menu_item(&self, menu_item_id: RecordId) -> Result<Vec<Review>, DbError> {
        let reviews = sqlx::query_as(
            r#"
            SELECT id, comment, authorId, menuItemId
            FROM reviews
            WHERE menuItemId = ?
            ORDER BY id
            "#,
        )
        .bind(menu_item_id.get())
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }
}
