//! GraphQL API module
//!
//! Schema and resolvers for menu items and their reviews. Resolvers reach
//! storage only through the [`Database`] stored in the schema context.
//!
//! # Example Queries
//!
//! ```graphql
//! mutation {
//!   addMenuItem(params: { name: "Pizza", price: 10, rating: 5 }) { id name }
//! }
//!
//! query {
//!   menuItems { id name price rating reviews { id comment authorId } }
//!   menuItem(name: "Pizza") { id }
//! }
//! ```

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{MenuItem, MenuItemInput, Review, ReviewInput};

use async_graphql::{EmptySubscription, Schema};

use crate::db::Database;

/// GraphQL schema type
pub type MenuSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the storage accessor injected into its context
pub fn build_schema(db: Database) -> MenuSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}

/// Export the schema as SDL without needing a database
pub fn export_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
