//! Print the GraphQL schema as SDL

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Write the SDL to this file instead of stdout
    #[arg(long = "out", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn run_schema(args: SchemaArgs) -> Result<()> {
    let sdl = menuql_server::export_sdl();

    match args.output {
        Some(path) => {
            std::fs::write(&path, sdl)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            tracing::info!("Schema written to {}", path.display());
        }
        None => print!("{}", sdl),
    }

    Ok(())
}
