//! ReadOra CLI - database migrations and catalog checks.
//!
//! # Usage
//!
//! ```bash
//! # Run storefront database migrations
//! readora-cli migrate
//!
//! # Validate the catalog file and print category counts
//! readora-cli catalog --content-dir crates/storefront/content
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "readora-cli")]
#[command(author, version, about = "ReadOra CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run storefront database migrations
    Migrate,
    /// Validate the catalog file and report per-category counts
    Catalog {
        /// Directory containing books.json
        #[arg(long, default_value = "crates/storefront/content")]
        content_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Catalog { content_dir } => commands::catalog::check(&content_dir)?,
    }
    Ok(())
}
