//! Category overview route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use readora_core::{Category, Criteria};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::PrefersDark;
use crate::routes::PageChrome;
use crate::state::AppState;

/// A category tile: name, blurb, live book count, and the filtered listing
/// link.
#[derive(Clone)]
pub struct CategoryView {
    pub name: &'static str,
    pub blurb: &'static str,
    pub count: usize,
    pub href: String,
}

/// Category overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate {
    pub chrome: PageChrome,
    pub categories: Vec<CategoryView>,
}

/// Display the category overview.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
) -> Result<CategoriesTemplate> {
    let chrome = PageChrome::build(&state, platform_dark, "/categories").await;

    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let criteria = Criteria {
                category: Some(category),
                ..Criteria::default()
            };
            CategoryView {
                name: category.name(),
                blurb: category.blurb(),
                count: state.catalog().category_count(category),
                href: format!("/books?{}", criteria.to_query_string()),
            }
        })
        .collect();

    Ok(CategoriesTemplate { chrome, categories })
}
