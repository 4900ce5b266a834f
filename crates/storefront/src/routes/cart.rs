//! Cart route handlers.
//!
//! Mutations are plain form posts that redirect back, so the cart works
//! without any client-side scripting. `add` accepts an optional `redirect`
//! target; the detail page's Buy Now button uses it to land on the cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    response::Redirect,
};
use readora_core::{BookId, CartItem, OrderTotals};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::PrefersDark;
use crate::routes::{PageChrome, local_redirect};
use crate::state::AppState;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub chrome: PageChrome,
    pub items: Vec<CartItem>,
    /// `None` when the cart is empty.
    pub totals: Option<OrderTotals>,
}

/// Form payload for adding a book.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub book_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub redirect: Option<String>,
}

const fn default_quantity() -> u32 {
    1
}

/// Form payload for setting a line quantity.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub book_id: String,
    pub quantity: i64,
}

/// Form payload naming a single line.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub book_id: String,
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
) -> Result<CartTemplate> {
    let chrome = PageChrome::build(&state, platform_dark, "/cart").await;
    let cart = state.cart().state().await;

    let totals = if cart.is_empty() {
        None
    } else {
        Some(OrderTotals::from_subtotal(cart.total))
    };

    Ok(CartTemplate {
        chrome,
        items: cart.items,
        totals,
    })
}

/// Add a book to the cart, merging with an existing line.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddForm>) -> Result<Redirect> {
    let id = BookId::new(form.book_id);
    let book = state
        .catalog()
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("book {id}")))?;

    if !book.in_stock {
        return Err(AppError::BadRequest(format!("{} is out of stock", book.title)));
    }

    let quantity = form.quantity.clamp(1, book.stock_count.max(1));
    let cart = state.cart().add(book, quantity).await?;
    tracing::info!(%id, quantity, item_count = cart.item_count, "added to cart");

    Ok(Redirect::to(&local_redirect(form.redirect, "/books")))
}

/// Set a line's quantity; zero or negative removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateForm>,
) -> Result<Redirect> {
    let id = BookId::new(form.book_id);
    state.cart().update_quantity(&id, form.quantity).await?;
    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveForm>,
) -> Result<Redirect> {
    let id = BookId::new(form.book_id);
    state.cart().remove(&id).await?;
    Ok(Redirect::to("/cart"))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Redirect> {
    state.cart().clear().await?;
    Ok(Redirect::to("/cart"))
}
