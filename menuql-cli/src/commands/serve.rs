//! HTTP server command
//!
//! Connects storage, synchronizes it and serves the GraphQL API.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use menuql_server::db::{Database, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use menuql_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MENUQL_BIND", default_value = "127.0.0.1:4000")]
    pub bind: SocketAddr,

    /// Database URL; the default in-memory store is lost on exit
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled connections (ignored for in-memory stores)
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Do not serve the GraphiQL page on GET /graphql
    #[arg(long)]
    pub no_playground: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = Database::connect(&args.database_url, args.max_connections)
        .await
        .context("Failed to connect to database")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        playground: !args.no_playground,
    };

    // Run server (blocks until shutdown)
    run_server(db, config).await.context("Server error")?;

    Ok(())
}
