//! GraphQL type definitions

use async_graphql::{ComplexObject, Context, InputObject, Result as GQLResult, SimpleObject, ID};

use crate::db::{self, Database, NewMenuItem, NewReview};
use crate::http::error::graphql_error;
use crate::models::{RecordId, ValidationError};

/// A single dish on the menu, with the reviews written about it
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct MenuItem {
    pub id: ID,
    pub name: String,
    pub price: Option<i32>,
    pub rating: Option<i32>,
    #[graphql(skip)]
    pub record_id: RecordId,
    /// Set when the parent query already fetched the reviews
    #[graphql(skip)]
    pub preloaded_reviews: Option<Vec<Review>>,
}

#[ComplexObject]
impl MenuItem {
    async fn reviews(&self, ctx: &Context<'_>) -> GQLResult<Option<Vec<Option<Review>>>> {
        if let Some(reviews) = &self.preloaded_reviews {
            return Ok(Some(reviews.iter().cloned().map(Some).collect()));
        }

        let db = ctx.data::<Database>()?;
        let reviews = db
            .reviews()
            .list_for_menu_item(self.record_id)
            .await
            .map_err(graphql_error)?;

        Ok(Some(reviews.into_iter().map(|r| Some(Review::from(r))).collect()))
    }
}

impl From<db::MenuItem> for MenuItem {
    fn from(item: db::MenuItem) -> Self {
        Self {
            id: ID::from(item.id.to_string()),
            name: item.name,
            // The column is REAL; the API contract is Int
            price: item.price.map(|p| p.round() as i32),
            rating: item.rating,
            record_id: RecordId::from(item.id),
            preloaded_reviews: None,
        }
    }
}

impl From<db::MenuItemWithReviews> for MenuItem {
    fn from(row: db::MenuItemWithReviews) -> Self {
        let mut item = Self::from(row.item);
        item.preloaded_reviews = Some(row.reviews.into_iter().map(Review::from).collect());
        item
    }
}

/// A comment left on a menu item
#[derive(Debug, Clone, SimpleObject)]
pub struct Review {
    pub id: ID,
    pub comment: String,
    pub author_id: ID,
}

impl From<db::Review> for Review {
    fn from(review: db::Review) -> Self {
        Self {
            id: ID::from(review.id.to_string()),
            comment: review.comment,
            author_id: ID::from(review.author_id.to_string()),
        }
    }
}

/// Input for `addMenuItem`
#[derive(Debug, Clone, InputObject)]
pub struct MenuItemInput {
    pub name: String,
    pub price: Option<i32>,
    pub rating: Option<i32>,
}

impl From<MenuItemInput> for NewMenuItem {
    fn from(input: MenuItemInput) -> Self {
        Self {
            name: input.name,
            price: input.price.map(f64::from),
            rating: input.rating,
        }
    }
}

/// Input for `addReview`
#[derive(Debug, Clone, InputObject)]
pub struct ReviewInput {
    pub comment: String,
    pub author_id: ID,
    pub menu_item_id: ID,
}

impl TryFrom<ReviewInput> for NewReview {
    type Error = ValidationError;

    fn try_from(input: ReviewInput) -> Result<Self, Self::Error> {
        Ok(Self {
            author_id: RecordId::parse("authorId", &input.author_id)?,
            menu_item_id: RecordId::parse("menuItemId", &input.menu_item_id)?,
            comment: input.comment,
        })
    }
}
