//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::storage::{Storage, StorageError};
use crate::stores::{CartStore, ThemeStore};

/// Error constructing the application state.
///
/// Any of these aborts startup: handlers must never run against a partially
/// initialized state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Constructed exactly once at startup; the
/// stores it holds are the only way handlers reach cart or theme state, so
/// an uninitialized access is unrepresentable.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    storage: Storage,
    cart: CartStore,
    theme: ThemeStore,
}

impl AppState {
    /// Create the application state: open storage, load the catalog, and
    /// hydrate the stores.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be opened or the catalog file is
    /// invalid. Callers should treat this as fatal.
    pub async fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let storage = Storage::connect(&config.database_url).await?;
        let catalog = Catalog::load(&config.content_dir)?;
        Self::from_parts(config, catalog, storage).await
    }

    /// Assemble state from pre-built parts (used by tests with in-memory or
    /// temp-file storage).
    ///
    /// # Errors
    ///
    /// Returns an error if the stores cannot be hydrated from storage.
    pub async fn from_parts(
        config: StorefrontConfig,
        catalog: Catalog,
        storage: Storage,
    ) -> Result<Self, StateError> {
        let cart = CartStore::load(storage.clone()).await?;
        let theme = ThemeStore::load(storage.clone()).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                storage,
                cart,
                theme,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the book catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the key-value storage.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.inner.storage
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the theme store.
    #[must_use]
    pub fn theme(&self) -> &ThemeStore {
        &self.inner.theme
    }
}
