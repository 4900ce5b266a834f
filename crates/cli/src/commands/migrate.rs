//! Database migration command.
//!
//! Opens the storefront database (creating the file if needed) and applies
//! any pending migrations from `crates/storefront/migrations/`. The
//! storefront also migrates on startup; this command exists so a deploy can
//! migrate ahead of the server swap.
//!
//! # Environment Variables
//!
//! - `READORA_DATABASE_URL` (or `DATABASE_URL`) - `SQLite` connection string

use readora_storefront::storage::{Storage, StorageError};

/// Migration command errors.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("Missing environment variable: READORA_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Run storefront database migrations.
pub async fn run() -> Result<(), MigrateError> {
    let database_url = std::env::var("READORA_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrateError::MissingDatabaseUrl)?;

    tracing::info!("Connecting to storefront database...");
    let storage = Storage::connect(&database_url).await?;
    storage.ping().await?;

    tracing::info!("Storefront migrations complete");
    Ok(())
}
