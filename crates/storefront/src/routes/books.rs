//! Catalog listing and book detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use readora_core::{Book, BookId, Category, Criteria, PriceSort, filter_books};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::PrefersDark;
use crate::routes::PageChrome;
use crate::state::AppState;

/// A catalog card: the book plus its cart membership flag.
#[derive(Clone)]
pub struct BookCardView {
    pub book: Book,
    pub in_cart: bool,
}

/// Raw listing query parameters, as they appear in the URL.
///
/// Every parameter is optional; anything absent or unparseable falls back
/// to the default for that criterion.
#[derive(Debug, Default, Deserialize)]
pub struct BooksQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "sortPrice")]
    pub sort_price: Option<String>,
    pub rating: Option<String>,
}

impl BooksQuery {
    /// Decode into filter criteria.
    fn into_criteria(self) -> Criteria {
        let mut criteria = Criteria::default();
        if let Some(search) = self.search {
            criteria.apply("search", &search);
        }
        if let Some(category) = self.category {
            criteria.apply("category", &category);
        }
        if let Some(sort_price) = self.sort_price {
            criteria.apply("sortPrice", &sort_price);
        }
        if let Some(rating) = self.rating {
            criteria.apply("rating", &rating);
        }
        criteria
    }
}

/// A filter-bar link: target URL plus whether it is the active choice.
#[derive(Clone)]
pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Build the category filter links, including "All Books".
fn category_links(criteria: &Criteria) -> Vec<FilterLink> {
    let mut links = vec![link(
        "All Books",
        Criteria {
            category: None,
            ..criteria.clone()
        },
        criteria.category.is_none(),
    )];

    for category in Category::ALL {
        links.push(link(
            category.name(),
            Criteria {
                category: Some(category),
                ..criteria.clone()
            },
            criteria.category == Some(category),
        ));
    }

    links
}

/// Build the price sort links.
fn sort_links(criteria: &Criteria) -> Vec<FilterLink> {
    let options = [
        ("Normal", PriceSort::Normal),
        ("High to Low", PriceSort::HighToLow),
        ("Low to High", PriceSort::LowToHigh),
    ];

    options
        .into_iter()
        .map(|(label, sort_price)| {
            link(
                label,
                Criteria {
                    sort_price,
                    ..criteria.clone()
                },
                criteria.sort_price == sort_price,
            )
        })
        .collect()
}

/// Build the star rating links; clicking the active star clears the filter.
fn rating_links(criteria: &Criteria) -> Vec<FilterLink> {
    (1..=5u8)
        .map(|star| {
            let min_rating = if criteria.min_rating == star { 0 } else { star };
            link(
                "★",
                Criteria {
                    min_rating,
                    ..criteria.clone()
                },
                criteria.min_rating >= star,
            )
        })
        .collect()
}

fn link(label: &str, criteria: Criteria, active: bool) -> FilterLink {
    let query = criteria.to_query_string();
    let href = if query.is_empty() {
        "/books".to_string()
    } else {
        format!("/books?{query}")
    };
    FilterLink {
        label: label.to_string(),
        href,
        active,
    }
}

/// Book listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "books/index.html")]
pub struct BooksIndexTemplate {
    pub chrome: PageChrome,
    pub cards: Vec<BookCardView>,
    pub search: String,
    pub category_links: Vec<FilterLink>,
    pub sort_links: Vec<FilterLink>,
    pub rating_links: Vec<FilterLink>,
    /// Query string preserved by the search form's hidden fields.
    pub non_search_criteria: Criteria,
}

/// Book detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "books/show.html")]
pub struct BookShowTemplate {
    pub chrome: PageChrome,
    pub book: Book,
    pub in_cart: bool,
}

/// Detail page for an unknown book identifier.
#[derive(Template, WebTemplate)]
#[template(path = "books/not_found.html")]
pub struct BookNotFoundTemplate {
    pub chrome: PageChrome,
}

/// Display the catalog listing, filtered by the query string.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
    Query(query): Query<BooksQuery>,
) -> Result<BooksIndexTemplate> {
    let criteria = query.into_criteria();

    let query_string = criteria.to_query_string();
    let path = if query_string.is_empty() {
        "/books".to_string()
    } else {
        format!("/books?{query_string}")
    };

    let chrome = PageChrome::build(&state, platform_dark, path).await;
    let cart = state.cart().state().await;

    let cards = filter_books(state.catalog().books(), &criteria)
        .into_iter()
        .map(|book| BookCardView {
            in_cart: cart.is_in_cart(&book.id),
            book: book.clone(),
        })
        .collect();

    Ok(BooksIndexTemplate {
        chrome,
        cards,
        search: criteria.search.clone(),
        category_links: category_links(&criteria),
        sort_links: sort_links(&criteria),
        rating_links: rating_links(&criteria),
        non_search_criteria: Criteria {
            search: String::new(),
            ..criteria
        },
    })
}

/// Display a book's detail page; unknown identifiers render a 404 page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = BookId::new(id);
    let path = format!("/books/{id}");

    let Some(book) = state.catalog().get(&id).cloned() else {
        tracing::debug!(%id, "book not found");
        let chrome = PageChrome::build(&state, platform_dark, "/books").await;
        return Ok((StatusCode::NOT_FOUND, BookNotFoundTemplate { chrome }).into_response());
    };

    let chrome = PageChrome::build(&state, platform_dark, path).await;
    let in_cart = state.cart().is_in_cart(&book.id).await;

    Ok(BookShowTemplate {
        chrome,
        book,
        in_cart,
    }
    .into_response())
}
