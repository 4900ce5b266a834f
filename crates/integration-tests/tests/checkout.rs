//! Checkout flow tests: guard, validation, confirmation, finalization.

#![allow(clippy::unwrap_used)]

use readora_core::CheckoutInfo;
use readora_integration_tests::{TestContext, assert_redirect};

const COMPLETE_FORM: [(&str, &str); 8] = [
    ("email", "reader@example.com"),
    ("firstName", "Jane"),
    ("lastName", "Doe"),
    ("address", "123 Main Street"),
    ("phoneNumber", "+1 555 0100"),
    ("city", "Springfield"),
    ("postalCode", "10001"),
    ("country", "United States"),
];

async fn seeded(ctx: &TestContext) {
    // 2 x 18.99 = 37.98 subtotal
    ctx.post_form("/cart/add", &[("book_id", "3"), ("quantity", "2")])
        .await;
}

#[tokio::test]
async fn test_empty_cart_redirects_to_cart() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/checkout").await;
    assert_redirect(&response, "/cart");

    let response = ctx.post_form("/checkout", &COMPLETE_FORM).await;
    assert_redirect(&response, "/cart");

    let response = ctx.post_form("/checkout/confirm", &COMPLETE_FORM).await;
    assert_redirect(&response, "/cart");
}

#[tokio::test]
async fn test_checkout_form_renders_with_summary() {
    let ctx = TestContext::new().await;
    seeded(&ctx).await;

    let body = ctx.get_text("/checkout").await;
    assert!(body.contains("Contact Information"));
    assert!(body.contains("Shipping Address"));
    assert!(body.contains("Order Summary"));
    assert!(body.contains("$37.98"));
    assert!(body.contains("Free"));
    assert!(body.contains("$41.02"));
}

#[tokio::test]
async fn test_incomplete_submit_re_renders_with_errors() {
    let ctx = TestContext::new().await;
    seeded(&ctx).await;

    let response = ctx
        .post_form(
            "/checkout",
            &[("email", "reader@example.com"), ("firstName", "Jane")],
        )
        .await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("Missing Information"));
    assert!(body.contains("Last name"));
    assert!(body.contains("Country"));
    assert!(!body.contains("Confirm Your Order"));
    // Entered values survive the round trip
    assert!(body.contains("value=\"Jane\""));
}

#[tokio::test]
async fn test_whitespace_fields_count_as_missing() {
    let ctx = TestContext::new().await;
    seeded(&ctx).await;

    let mut form = COMPLETE_FORM;
    form[5] = ("city", "   ");

    let response = ctx.post_form("/checkout", &form).await;
    let body = response.text().await.unwrap();
    assert!(body.contains("Missing Information"));
    assert!(body.contains("City"));
}

#[tokio::test]
async fn test_complete_submit_shows_confirmation() {
    let ctx = TestContext::new().await;
    seeded(&ctx).await;

    let response = ctx.post_form("/checkout", &COMPLETE_FORM).await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("Confirm Your Order"));
    assert!(body.contains("Jane Doe"));
    assert!(body.contains("$41.02"));
    // Values are carried in hidden fields for the confirm post
    assert!(body.contains("name=\"postalCode\" value=\"10001\""));

    // Submitting is not confirming: the cart is untouched
    assert!(!ctx.state.cart().state().await.is_empty());
}

#[tokio::test]
async fn test_confirm_persists_info_and_clears_cart() {
    let ctx = TestContext::new().await;
    seeded(&ctx).await;

    let response = ctx.post_form("/checkout/confirm", &COMPLETE_FORM).await;
    assert_redirect(&response, "/order-success");

    assert!(ctx.state.cart().state().await.is_empty());

    let stored: CheckoutInfo = ctx
        .state
        .storage()
        .get_json("checkout-info")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.first_name, "Jane");
    assert_eq!(stored.country, "United States");

    let body = ctx.get_text("/order-success").await;
    assert!(body.contains("Order Submitted"));
}

#[tokio::test]
async fn test_confirm_with_tampered_payload_falls_back_to_form() {
    let ctx = TestContext::new().await;
    seeded(&ctx).await;

    let mut form = COMPLETE_FORM;
    form[0] = ("email", "");

    let response = ctx.post_form("/checkout/confirm", &form).await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("Missing Information"));
    // No order was placed
    assert!(!ctx.state.cart().state().await.is_empty());
    let stored: Option<CheckoutInfo> = ctx.state.storage().get_json("checkout-info").await.unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_cancel_returns_to_form_with_values() {
    let ctx = TestContext::new().await;
    seeded(&ctx).await;

    let response = ctx.post_form("/checkout/cancel", &COMPLETE_FORM).await;
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("Submit Order"));
    assert!(body.contains("value=\"Jane\""));
    assert!(!body.contains("Missing Information"));
    assert!(!ctx.state.cart().state().await.is_empty());
}
