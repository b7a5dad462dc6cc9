//! Root query type

use async_graphql::{Context, Object, Result as GQLResult, ID};

use super::types::MenuItem;
use crate::db::Database;
use crate::http::error::graphql_error;
use crate::models::MenuItemLookup;

/// Root query type for GraphQL
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every menu item, with reviews attached
    async fn menu_items(&self, ctx: &Context<'_>) -> GQLResult<Option<Vec<Option<MenuItem>>>> {
        let db = ctx.data::<Database>()?;
        let items = db
            .menu_items()
            .list_with_reviews()
            .await
            .map_err(graphql_error)?;

        Ok(Some(items.into_iter().map(|item| Some(MenuItem::from(item))).collect()))
    }

    /// Look up one menu item by id, or else by exact name.
    ///
    /// Returns null when nothing matches. Supplying neither argument is a
    /// bad request.
    async fn menu_item(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        name: Option<String>,
    ) -> GQLResult<Option<MenuItem>> {
        let db = ctx.data::<Database>()?;
        let lookup =
            MenuItemLookup::from_args(id.as_ref().map(|id| id.as_str()), name).map_err(graphql_error)?;

        let item = db.menu_items().find(&lookup).await.map_err(graphql_error)?;
        Ok(item.map(MenuItem::from))
    }
}
