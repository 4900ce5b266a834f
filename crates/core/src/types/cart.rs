//! Cart line items and derived cart state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Book, BookId};

/// A cart line item: a book plus a purchase quantity.
///
/// The book's fields are flattened into the item so the persisted JSON is a
/// single flat object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub book: Book,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.book.price * Decimal::from(self.quantity)
    }
}

/// The full cart: line items in insertion order plus derived aggregates.
///
/// `total` and `item_count` are recomputed from `items` after every mutation
/// and are never settable independently. The struct serializes in the shape
/// persisted to storage (`items` / `total` / `itemCount`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub item_count: u32,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a book to the cart.
    ///
    /// If a line with the same identifier already exists its quantity is
    /// incremented; otherwise a new line is appended. The cart never holds
    /// two lines for one book.
    pub fn add(&mut self, book: Book, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.book.id == book.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem { book, quantity });
        }
        self.recompute();
    }

    /// Remove the line with the given identifier. No-op if absent.
    pub fn remove(&mut self, id: &BookId) {
        self.items.retain(|item| &item.book.id != id);
        self.recompute();
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line, identically to
    /// [`CartState::remove`].
    pub fn update_quantity(&mut self, id: &BookId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|item| &item.book.id == id) {
            item.quantity = quantity;
        }
        self.recompute();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Pure membership query; no side effects.
    #[must_use]
    pub fn is_in_cart(&self, id: &BookId) -> bool {
        self.items.iter().any(|item| &item.book.id == id)
    }

    fn recompute(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
        self.item_count = self.items.iter().map(|item| item.quantity).sum();
    }
}
