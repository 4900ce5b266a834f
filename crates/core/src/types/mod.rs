//! Domain types for the ReadOra bookstore.
//!
//! All prices use [`rust_decimal::Decimal`] to avoid floating-point money
//! arithmetic; JSON serialization renders them as strings.

mod book;
mod cart;
mod category;
mod checkout;
mod criteria;
mod id;

pub use book::Book;
pub use cart::{CartItem, CartState};
pub use category::{Category, CategoryParseError};
pub use checkout::{CheckoutInfo, OrderTotals, REQUIRED_FIELD_COUNT};
pub use criteria::{Criteria, PriceSort, filter_books};
pub use id::BookId;
