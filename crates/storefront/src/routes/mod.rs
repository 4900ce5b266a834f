//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /health/ready           - Readiness check (storage ping)
//!
//! # Catalog
//! GET  /books                  - Book listing with filters
//! GET  /books/{id}             - Book detail
//! GET  /categories             - Category overview
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a book (merges with existing line)
//! POST /cart/update            - Set a line quantity (0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//!
//! # Checkout
//! GET  /checkout               - Checkout form (empty cart redirects to /cart)
//! POST /checkout               - Validate and show confirmation step
//! POST /checkout/confirm       - Finalize: persist info, clear cart
//! POST /checkout/cancel        - Back to the form with entered values
//! GET  /order-success          - Order confirmation page
//!
//! # Theme
//! POST /theme                  - Toggle dark mode, redirect back
//! ```

pub mod books;
pub mod cart;
pub mod categories;
pub mod checkout;
pub mod home;
pub mod theme;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    routing::{get, post},
};

use crate::filters;
use crate::middleware::PrefersDark;
use crate::state::AppState;

/// Shared navigation and theme state rendered by the base layout.
#[derive(Clone)]
pub struct PageChrome {
    /// Effective dark flag for this request.
    pub dark: bool,
    /// Total cart quantity for the nav badge.
    pub cart_count: u32,
    /// Path the theme toggle redirects back to.
    pub path: String,
}

impl PageChrome {
    /// Resolve the chrome for a request: effective theme plus cart badge.
    pub async fn build(state: &AppState, platform_dark: bool, path: impl Into<String>) -> Self {
        Self {
            dark: state.theme().effective_dark(platform_dark).await,
            cart_count: state.cart().item_count().await,
            path: path.into(),
        }
    }
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub chrome: PageChrome,
    pub path: String,
}

/// Fallback handler for unmatched routes.
pub async fn not_found(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
    uri: Uri,
) -> (StatusCode, NotFoundTemplate) {
    let path = uri.path().to_string();
    tracing::warn!(%path, "route not found");
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            chrome: PageChrome::build(&state, platform_dark, "/").await,
            path,
        },
    )
}

/// Keep only redirect targets that stay on this site.
///
/// Anything that is not a single-slash absolute path falls back to the
/// default, so a form cannot bounce the visitor to another origin.
fn local_redirect(target: Option<String>, default: &str) -> String {
    match target {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => default.to_string(),
    }
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show).post(checkout::submit))
        .route("/confirm", post(checkout::confirm))
        .route("/cancel", post(checkout::cancel))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/books", get(books::index))
        .route("/books/{id}", get(books::show))
        .route("/categories", get(categories::index))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/order-success", get(checkout::success))
        .route("/theme", post(theme::toggle))
        .fallback(not_found)
}
