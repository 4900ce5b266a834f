//! Checkout route handlers.
//!
//! Checkout is a two-step flow: the form posts to `/checkout`, which
//! validates and shows a confirmation step carrying the entered values in
//! hidden fields. Confirming re-validates, persists the contact info, clears
//! the cart, and lands on the success page. An empty cart redirects to
//! `/cart` at every step.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use readora_core::{CartItem, CheckoutInfo, OrderTotals};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::PrefersDark;
use crate::routes::PageChrome;
use crate::state::AppState;
use crate::storage::keys;

/// Countries offered in the shipping address selector.
pub const COUNTRIES: [&str; 7] = [
    "United States",
    "Canada",
    "United Kingdom",
    "Australia",
    "Germany",
    "France",
    "Other",
];

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub chrome: PageChrome,
    pub info: CheckoutInfo,
    /// Labels of required fields still missing; empty on first render.
    pub errors: Vec<&'static str>,
    pub items: Vec<CartItem>,
    pub totals: OrderTotals,
    pub countries: [&'static str; 7],
}

/// Confirmation step template; carries the entered values in hidden fields.
#[derive(Template, WebTemplate)]
#[template(path = "checkout_confirm.html")]
pub struct ConfirmTemplate {
    pub chrome: PageChrome,
    pub info: CheckoutInfo,
    pub items: Vec<CartItem>,
    pub totals: OrderTotals,
}

/// Order success page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_success.html")]
pub struct OrderSuccessTemplate {
    pub chrome: PageChrome,
}

async fn form_page(
    state: &AppState,
    platform_dark: bool,
    info: CheckoutInfo,
    errors: Vec<&'static str>,
) -> Result<Option<CheckoutTemplate>> {
    let cart = state.cart().state().await;
    if cart.is_empty() {
        return Ok(None);
    }

    Ok(Some(CheckoutTemplate {
        chrome: PageChrome::build(state, platform_dark, "/checkout").await,
        info,
        errors,
        items: cart.items,
        totals: OrderTotals::from_subtotal(cart.total),
        countries: COUNTRIES,
    }))
}

/// Display the checkout form.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
) -> Result<Response> {
    match form_page(&state, platform_dark, CheckoutInfo::default(), Vec::new()).await? {
        Some(page) => Ok(page.into_response()),
        None => Ok(Redirect::to("/cart").into_response()),
    }
}

/// Validate the form; show the confirmation step when complete, otherwise
/// re-render the form with the missing field labels.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
    Form(form): Form<CheckoutInfo>,
) -> Result<Response> {
    let cart = state.cart().state().await;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let missing = form.missing_fields();
    if !missing.is_empty() {
        tracing::debug!(missing = missing.len(), "checkout form incomplete");
        let page = form_page(&state, platform_dark, form, missing).await?;
        return match page {
            Some(page) => Ok(page.into_response()),
            None => Ok(Redirect::to("/cart").into_response()),
        };
    }

    Ok(ConfirmTemplate {
        chrome: PageChrome::build(&state, platform_dark, "/checkout").await,
        info: form,
        items: cart.items,
        totals: OrderTotals::from_subtotal(cart.total),
    }
    .into_response())
}

/// Finalize the order: persist the contact info and clear the cart.
///
/// Re-validates the hidden-field payload; a tampered or stale submission
/// falls back to the form instead of placing an order.
#[instrument(skip(state, form))]
pub async fn confirm(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
    Form(form): Form<CheckoutInfo>,
) -> Result<Response> {
    let cart = state.cart().state().await;
    if cart.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let missing = form.missing_fields();
    if !missing.is_empty() {
        let page = form_page(&state, platform_dark, form, missing).await?;
        return match page {
            Some(page) => Ok(page.into_response()),
            None => Ok(Redirect::to("/cart").into_response()),
        };
    }

    state.storage().put_json(keys::CHECKOUT_INFO, &form).await?;
    state.cart().clear().await?;
    tracing::info!(items = cart.items.len(), total = %cart.total, "order placed");

    Ok(Redirect::to("/order-success").into_response())
}

/// Back out of the confirmation step, keeping the entered values.
#[instrument(skip(state, form))]
pub async fn cancel(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
    Form(form): Form<CheckoutInfo>,
) -> Result<Response> {
    match form_page(&state, platform_dark, form, Vec::new()).await? {
        Some(page) => Ok(page.into_response()),
        None => Ok(Redirect::to("/cart").into_response()),
    }
}

/// Display the order success page.
#[instrument(skip(state))]
pub async fn success(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
) -> Result<OrderSuccessTemplate> {
    Ok(OrderSuccessTemplate {
        chrome: PageChrome::build(&state, platform_dark, "/order-success").await,
    })
}
