//! HTTP server layer
//!
//! Axum server with:
//! - GraphQL endpoint and GraphiQL page
//! - Health check with storage ping
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod server;
pub mod error;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
