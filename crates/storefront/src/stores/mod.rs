//! Stateful stores backing the storefront.
//!
//! Each store owns its in-memory state behind a `tokio::sync::RwLock` and
//! writes through to [`crate::storage::Storage`] on every mutation, holding
//! the write lock across both steps so reads never observe memory ahead of
//! (or behind) storage.

mod cart;
mod theme;

pub use cart::CartStore;
pub use theme::ThemeStore;
