//! menuql CLI - GraphQL server for menu items and reviews
//!
//! Subcommands:
//! - `serve`: connect storage, sync the schema and serve `/graphql`
//! - `schema`: print the GraphQL SDL

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "menuql",
    author,
    version,
    about = "GraphQL API for menu items and their reviews"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the GraphQL HTTP server
    Serve(commands::serve::ServeArgs),
    /// Print the GraphQL schema (SDL)
    Schema(commands::schema::SchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Schema(args) => commands::run_schema(args)?,
    }

    Ok(())
}
