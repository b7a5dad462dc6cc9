//! menuql-server: GraphQL API over menu items and their reviews
//!
//! Layers, leaves first:
//! - [`db`]: SQLite pool, storage sync and repositories
//! - [`models`]: argument parsing and validation
//! - [`graphql`]: schema and resolvers
//! - [`http`]: axum router and server bootstrap

pub mod db;
pub mod graphql;
pub mod http;
pub mod models;

pub use db::{Database, DbError};
pub use graphql::{build_schema, export_sdl, MenuSchema};
pub use http::{build_router, run_server, ServerConfig, ServerError};
