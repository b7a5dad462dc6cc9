//! GraphQL mutations for creating and deleting menu data

use async_graphql::{Context, Object, Result as GQLResult, ID};

use super::types::{MenuItem, MenuItemInput, Review, ReviewInput};
use crate::db::{Database, NewReview};
use crate::http::error::graphql_error;
use crate::models::{RecordId, ValidationError};

/// Root mutation type for GraphQL
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a menu item
    async fn add_menu_item(
        &self,
        ctx: &Context<'_>,
        params: Option<MenuItemInput>,
    ) -> GQLResult<Option<MenuItem>> {
        let db = ctx.data::<Database>()?;
        let params = params
            .ok_or(ValidationError::Missing { field: "params" })
            .map_err(graphql_error)?;

        tracing::info!(rating = ?params.rating, "Adding menu item");

        let item = db
            .menu_items()
            .create(params.into())
            .await
            .map_err(graphql_error)?;

        Ok(Some(MenuItem::from(item)))
    }

    /// Delete a menu item and return what it looked like
    async fn delete_menu_item(&self, ctx: &Context<'_>, id: ID) -> GQLResult<Option<MenuItem>> {
        let db = ctx.data::<Database>()?;
        let id = RecordId::parse("id", &id).map_err(graphql_error)?;

        let item = db.menu_items().delete(id).await.map_err(graphql_error)?;
        Ok(Some(MenuItem::from(item)))
    }

    /// Add a review to a menu item.
    ///
    /// The menu item is not checked for existence.
    async fn add_review(
        &self,
        ctx: &Context<'_>,
        review: Option<ReviewInput>,
    ) -> GQLResult<Option<Review>> {
        let db = ctx.data::<Database>()?;
        let review = review
            .ok_or(ValidationError::Missing { field: "review" })
            .and_then(NewReview::try_from)
            .map_err(graphql_error)?;

        let created = db.reviews().create(review).await.map_err(graphql_error)?;
        Ok(Some(Review::from(created)))
    }
}
