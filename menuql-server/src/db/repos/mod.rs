//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Batches child rows for list operations (no N+1)
//! - Uses a transaction per write, rolled back if dropped before commit

pub mod menu_items;
pub mod reviews;

pub use menu_items::{MenuItem, MenuItemRepo, MenuItemWithReviews, NewMenuItem};
pub use reviews::{NewReview, Review, ReviewRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
