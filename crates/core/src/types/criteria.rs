//! Catalog filter criteria and the pure query engine.
//!
//! Criteria mirror into the page URL so filtered views are shareable: a
//! criterion at its default value is omitted from the query string, and
//! [`Criteria::from_query_string`] reverses [`Criteria::to_query_string`]
//! exactly for every reachable combination.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{Book, Category};

/// Price sort order for the catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceSort {
    /// Catalog order (no price sort).
    #[default]
    Normal,
    /// Most expensive first.
    HighToLow,
    /// Cheapest first.
    LowToHigh,
}

impl PriceSort {
    /// The query-string token for this order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::HighToLow => "high",
            Self::LowToHigh => "low",
        }
    }

    /// Parse a query-string token. Unknown tokens fall back to [`Self::Normal`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "high" => Self::HighToLow,
            "low" => Self::LowToHigh,
            _ => Self::Normal,
        }
    }
}

/// The current set of catalog filter and sort parameters.
///
/// Transient UI state; never persisted to storage, only mirrored into the
/// URL query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Free-text search, matched against title and author. Empty = no filter.
    pub search: String,
    /// Selected category; `None` means "All Books".
    pub category: Option<Category>,
    pub sort_price: PriceSort,
    /// Minimum star rating, 1-5; 0 means no filter.
    pub min_rating: u8,
}

impl Criteria {
    /// True when every criterion is at its default value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    /// Encode into a URL query string, omitting criteria at their defaults.
    ///
    /// Returns an empty string when nothing is set; otherwise a string like
    /// `search=dune&rating=4` (no leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if !self.search.is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        if let Some(category) = self.category {
            pairs.push(format!("category={}", urlencoding::encode(category.name())));
        }
        if self.sort_price != PriceSort::Normal {
            pairs.push(format!("sortPrice={}", self.sort_price.as_str()));
        }
        if self.min_rating > 0 {
            pairs.push(format!("rating={}", self.min_rating));
        }

        pairs.join("&")
    }

    /// Decode from a URL query string (with or without a leading `?`).
    ///
    /// Unknown parameters and unparseable values fall back to the default
    /// for that criterion rather than erroring.
    #[must_use]
    pub fn from_query_string(query: &str) -> Self {
        let mut criteria = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(value)
                .unwrap_or(Cow::Borrowed(value))
                .into_owned();
            criteria.apply(key, &value);
        }

        criteria
    }

    /// Apply a single decoded query parameter.
    pub fn apply(&mut self, key: &str, value: &str) {
        match key {
            "search" => self.search = value.to_string(),
            "category" => self.category = value.parse().ok(),
            "sortPrice" => self.sort_price = PriceSort::parse(value),
            "rating" => self.min_rating = value.parse().map_or(0, |r: u8| r.min(5)),
            _ => {}
        }
    }
}

/// Filter and order the catalog by the given criteria.
///
/// Pure function: identical inputs always yield the identical ordered list.
/// Filters apply in sequence (search, category, minimum rating), then the
/// price sort; the sort is stable, so `PriceSort::Normal` preserves catalog
/// order and price ties keep their relative order.
#[must_use]
pub fn filter_books<'a>(books: &'a [Book], criteria: &Criteria) -> Vec<&'a Book> {
    let search = criteria.search.to_lowercase();

    let mut result: Vec<&Book> = books
        .iter()
        .filter(|book| {
            search.is_empty()
                || book.title.to_lowercase().contains(&search)
                || book.author.to_lowercase().contains(&search)
        })
        .filter(|book| criteria.category.is_none_or(|c| book.category == c))
        .filter(|book| {
            criteria.min_rating == 0 || book.rating.floor() >= f64::from(criteria.min_rating)
        })
        .collect();

    match criteria.sort_price {
        PriceSort::Normal => {}
        PriceSort::HighToLow => result.sort_by(|a, b| b.price.cmp(&a.price)),
        PriceSort::LowToHigh => result.sort_by(|a, b| a.price.cmp(&b.price)),
    }

    result
}
