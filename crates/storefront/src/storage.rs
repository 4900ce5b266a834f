//! SQLite-backed key-value storage.
//!
//! The storefront persists exactly three entries, each a JSON document under
//! a fixed string key (see [`keys`]): the cart state, the theme token, and
//! the checkout record written at order confirmation. The schema is managed
//! by `sqlx::migrate!` and applied on connect.

use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use thiserror::Error;

/// Fixed storage keys.
pub mod keys {
    /// JSON-serialized `CartState`.
    pub const CART: &str = "bookstore-cart";

    /// JSON-serialized theme token, `"dark"` or `"light"`.
    pub const THEME: &str = "theme";

    /// JSON-serialized `CheckoutInfo`, written at order confirmation.
    /// Never read back; it is the durable record of the order.
    pub const CHECKOUT_INFO: &str = "checkout-info";
}

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to the key-value store. Cheap to clone (wraps a pool).
#[derive(Debug, Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Open (creating if missing) the database at the given URL and apply
    /// migrations.
    ///
    /// WAL journal mode keeps reads from blocking the write-through persist
    /// performed on every cart mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// An in-memory store for tests.
    ///
    /// Limited to a single connection; every connection to `:memory:` gets
    /// its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or migrated.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    /// Write `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, datetime('now')) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Read and deserialize the JSON value stored under `key`.
    ///
    /// Missing and unparseable entries are both treated as absence, not
    /// failure: stores fall back to their defaults silently.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying query fails.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get(key).await? else {
            tracing::debug!(key, "no stored value, using default");
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value unparseable, using default");
                Ok(None)
            }
        }
    }

    /// Serialize `value` to JSON and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.put(key, &raw).await
    }

    /// Check that the database is reachable (readiness probe).
    ///
    /// # Errors
    ///
    /// Returns an error if the probe query fails.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
