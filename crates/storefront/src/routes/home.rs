//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::PrefersDark;
use crate::routes::PageChrome;
use crate::routes::books::BookCardView;
use crate::state::AppState;

/// A selling point shown in the "why choose us" strip.
#[derive(Clone)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline number shown in the hero stats band.
#[derive(Clone)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Vast Collection",
            description: "Over 10,000+ books across all genres and categories",
        },
        Feature {
            title: "Free Shipping",
            description: "Free shipping on orders over $25 worldwide",
        },
        Feature {
            title: "Secure Payment",
            description: "Your payment information is always safe and secure",
        },
        Feature {
            title: "24/7 Support",
            description: "Our customer service team is here to help anytime",
        },
    ]
}

fn stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "10K+",
            label: "Books Available",
        },
        Stat {
            value: "50K+",
            label: "Happy Readers",
        },
        Stat {
            value: "500+",
            label: "Award Winners",
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub featured: Vec<BookCardView>,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

/// Number of books in the featured rail.
const FEATURED_COUNT: usize = 4;

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
) -> Result<HomeTemplate> {
    let chrome = PageChrome::build(&state, platform_dark, "/").await;
    let cart = state.cart().state().await;

    let featured = state
        .catalog()
        .featured(FEATURED_COUNT)
        .iter()
        .map(|book| BookCardView {
            in_cart: cart.is_in_cart(&book.id),
            book: book.clone(),
        })
        .collect();

    Ok(HomeTemplate {
        chrome,
        featured,
        features: features(),
        stats: stats(),
    })
}
