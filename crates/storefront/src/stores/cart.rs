//! The persistent cart store.

use readora_core::{Book, BookId, CartState};
use tokio::sync::RwLock;

use crate::storage::{Storage, StorageError, keys};

/// Holds the cart state and persists it after every mutation.
///
/// Constructed once at startup from the stored state (absent or unparseable
/// state falls back to the empty cart) and injected into handlers through
/// the application state.
#[derive(Debug)]
pub struct CartStore {
    storage: Storage,
    state: RwLock<CartState>,
}

impl CartStore {
    /// Load the cart from storage, falling back to an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read (absence is not an error).
    pub async fn load(storage: Storage) -> Result<Self, StorageError> {
        let state = storage
            .get_json::<CartState>(keys::CART)
            .await?
            .unwrap_or_default();

        if !state.is_empty() {
            tracing::info!(items = state.items.len(), "restored cart from storage");
        }

        Ok(Self {
            storage,
            state: RwLock::new(state),
        })
    }

    /// A snapshot of the current cart state.
    pub async fn state(&self) -> CartState {
        self.state.read().await.clone()
    }

    /// Number of items in the cart (sum of quantities).
    pub async fn item_count(&self) -> u32 {
        self.state.read().await.item_count
    }

    /// Pure membership query; no side effects.
    pub async fn is_in_cart(&self, id: &BookId) -> bool {
        self.state.read().await.is_in_cart(id)
    }

    /// Add a book, merging with an existing line for the same identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through persist fails.
    pub async fn add(&self, book: Book, quantity: u32) -> Result<CartState, StorageError> {
        self.mutate(|state| state.add(book, quantity)).await
    }

    /// Remove the line with the given identifier; no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through persist fails.
    pub async fn remove(&self, id: &BookId) -> Result<CartState, StorageError> {
        self.mutate(|state| state.remove(id)).await
    }

    /// Set a line's quantity; zero or negative removes the line.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through persist fails.
    pub async fn update_quantity(
        &self,
        id: &BookId,
        quantity: i64,
    ) -> Result<CartState, StorageError> {
        self.mutate(|state| state.update_quantity(id, quantity)).await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through persist fails.
    pub async fn clear(&self) -> Result<CartState, StorageError> {
        self.mutate(CartState::clear).await
    }

    /// Apply a mutation and persist the result before releasing the lock.
    async fn mutate(
        &self,
        mutation: impl FnOnce(&mut CartState),
    ) -> Result<CartState, StorageError> {
        let mut state = self.state.write().await;
        mutation(&mut state);
        self.storage.put_json(keys::CART, &*state).await?;
        Ok(state.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use readora_core::Category;
    use rust_decimal::Decimal;

    use super::*;

    fn book(id: &str, price: i64) -> Book {
        Book {
            id: BookId::new(id),
            title: format!("Book {id}"),
            author: "Test Author".to_string(),
            category: Category::History,
            price: Decimal::new(price, 2),
            original_price: None,
            rating: 4.2,
            in_stock: true,
            stock_count: 9,
            isbn: format!("isbn-{id}"),
            pages: 250,
            language: "English".to_string(),
            publisher: "Test House".to_string(),
            published_date: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            cover_image: String::new(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_starts_empty_without_stored_state() {
        let store = CartStore::load(Storage::in_memory().await.unwrap())
            .await
            .unwrap();
        assert!(store.state().await.is_empty());
    }

    #[tokio::test]
    async fn test_mutations_persist_to_storage() {
        let storage = Storage::in_memory().await.unwrap();
        let store = CartStore::load(storage.clone()).await.unwrap();

        store.add(book("a", 1000), 2).await.unwrap();

        let persisted: CartState = storage.get_json(keys::CART).await.unwrap().unwrap();
        assert_eq!(persisted.item_count, 2);
        assert_eq!(persisted.total, Decimal::new(2000, 2));
    }

    #[tokio::test]
    async fn test_reload_restores_prior_state() {
        let storage = Storage::in_memory().await.unwrap();
        {
            let store = CartStore::load(storage.clone()).await.unwrap();
            store.add(book("a", 1500), 1).await.unwrap();
            store.add(book("b", 500), 3).await.unwrap();
        }

        let reloaded = CartStore::load(storage).await.unwrap();
        let state = reloaded.state().await;
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.item_count, 4);
    }

    #[tokio::test]
    async fn test_unparseable_stored_cart_falls_back_to_empty() {
        let storage = Storage::in_memory().await.unwrap();
        storage.put(keys::CART, "not a cart").await.unwrap();

        let store = CartStore::load(storage).await.unwrap();
        assert!(store.state().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_resets_persisted_state() {
        let storage = Storage::in_memory().await.unwrap();
        let store = CartStore::load(storage.clone()).await.unwrap();

        store.add(book("a", 1000), 1).await.unwrap();
        store.clear().await.unwrap();

        let persisted: CartState = storage.get_json(keys::CART).await.unwrap().unwrap();
        assert_eq!(persisted, CartState::empty());
    }

    #[tokio::test]
    async fn test_update_quantity_zero_removes() {
        let store = CartStore::load(Storage::in_memory().await.unwrap())
            .await
            .unwrap();

        store.add(book("a", 1000), 2).await.unwrap();
        let state = store.update_quantity(&BookId::new("a"), 0).await.unwrap();
        assert!(state.is_empty());
        assert!(!store.is_in_cart(&BookId::new("a")).await);
    }
}
