//! The catalog book record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BookId, Category};

/// A purchasable book.
///
/// Immutable once loaded; the catalog file is the only source of these.
/// Field names serialize in camelCase to match the cart storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub category: Category,
    /// Current sale price.
    pub price: Decimal,
    /// Pre-discount price, shown struck through when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Average star rating, 0.0 to 5.0.
    pub rating: f64,
    pub in_stock: bool,
    pub stock_count: u32,
    pub isbn: String,
    pub pages: u32,
    pub language: String,
    pub publisher: String,
    pub published_date: NaiveDate,
    /// Cover image path, served from the static asset tree.
    pub cover_image: String,
    pub description: String,
}

impl Book {
    /// Discount against the original price, if any.
    #[must_use]
    pub fn savings(&self) -> Option<Decimal> {
        self.original_price.map(|original| original - self.price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gatsby() -> Book {
        Book {
            id: BookId::new("1"),
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            category: Category::ClassicLiterature,
            price: Decimal::new(1299, 2),
            original_price: Some(Decimal::new(1599, 2)),
            rating: 4.5,
            in_stock: true,
            stock_count: 12,
            isbn: "978-0-7432-7356-5".to_string(),
            pages: 180,
            language: "English".to_string(),
            publisher: "Scribner".to_string(),
            published_date: NaiveDate::from_ymd_opt(2004, 9, 30).unwrap(),
            cover_image: "/static/images/covers/the-great-gatsby.jpg".to_string(),
            description: "A classic of the Jazz Age.".to_string(),
        }
    }

    #[test]
    fn test_savings() {
        let book = gatsby();
        assert_eq!(book.savings(), Some(Decimal::new(300, 2)));

        let full_price = Book {
            original_price: None,
            ..book
        };
        assert_eq!(full_price.savings(), None);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(gatsby()).unwrap();
        assert_eq!(json["originalPrice"], "15.99");
        assert_eq!(json["stockCount"], 12);
        assert_eq!(json["coverImage"], "/static/images/covers/the-great-gatsby.jpg");
        assert_eq!(json["category"], "Classic Literature");
    }

    #[test]
    fn test_original_price_optional_in_json() {
        let mut json = serde_json::to_value(gatsby()).unwrap();
        json.as_object_mut().unwrap().remove("originalPrice");

        let book: Book = serde_json::from_value(json).unwrap();
        assert_eq!(book.original_price, None);
    }
}
