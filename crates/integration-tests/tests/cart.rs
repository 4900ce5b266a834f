//! Cart flow tests: add, merge, update, remove, clear, totals.

#![allow(clippy::unwrap_used)]

use readora_integration_tests::{TestContext, assert_redirect};

#[tokio::test]
async fn test_empty_cart_page() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/cart").await;

    assert!(body.contains("Your cart is empty"));
    assert!(!body.contains("Proceed to Checkout"));
}

#[tokio::test]
async fn test_add_redirects_and_shows_line() {
    let ctx = TestContext::new().await;

    let response = ctx
        .post_form("/cart/add", &[("book_id", "1"), ("quantity", "2")])
        .await;
    assert_redirect(&response, "/books");

    let body = ctx.get_text("/cart").await;
    assert!(body.contains("The Great Gatsby"));
    // 12.99 x 2
    assert!(body.contains("$25.98"));
}

#[tokio::test]
async fn test_add_honors_redirect_target() {
    let ctx = TestContext::new().await;

    let response = ctx
        .post_form(
            "/cart/add",
            &[("book_id", "1"), ("quantity", "1"), ("redirect", "/cart")],
        )
        .await;
    assert_redirect(&response, "/cart");
}

#[tokio::test]
async fn test_add_rejects_offsite_redirect() {
    let ctx = TestContext::new().await;

    let response = ctx
        .post_form(
            "/cart/add",
            &[
                ("book_id", "1"),
                ("quantity", "1"),
                ("redirect", "https://example.com/"),
            ],
        )
        .await;
    assert_redirect(&response, "/books");
}

#[tokio::test]
async fn test_add_merges_lines_for_same_book() {
    let ctx = TestContext::new().await;

    ctx.post_form("/cart/add", &[("book_id", "1"), ("quantity", "1")])
        .await;
    ctx.post_form("/cart/add", &[("book_id", "1"), ("quantity", "2")])
        .await;

    let state = ctx.state.cart().state().await;
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].quantity, 3);
    assert_eq!(state.item_count, 3);
}

#[tokio::test]
async fn test_add_unknown_book_is_404() {
    let ctx = TestContext::new().await;

    let response = ctx
        .post_form("/cart/add", &[("book_id", "nope"), ("quantity", "1")])
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_add_out_of_stock_book_is_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx
        .post_form("/cart/add", &[("book_id", "6"), ("quantity", "1")])
        .await;
    assert_eq!(response.status(), 400);
    assert!(ctx.state.cart().state().await.is_empty());
}

#[tokio::test]
async fn test_nav_badge_shows_item_count() {
    let ctx = TestContext::new().await;

    ctx.post_form("/cart/add", &[("book_id", "1"), ("quantity", "2")])
        .await;
    ctx.post_form("/cart/add", &[("book_id", "3"), ("quantity", "1")])
        .await;

    let body = ctx.get_text("/").await;
    assert!(body.contains("cart-badge"));
    assert!(body.contains(">3</span>"));
}

#[tokio::test]
async fn test_update_quantity() {
    let ctx = TestContext::new().await;

    ctx.post_form("/cart/add", &[("book_id", "1"), ("quantity", "1")])
        .await;
    let response = ctx
        .post_form("/cart/update", &[("book_id", "1"), ("quantity", "4")])
        .await;
    assert_redirect(&response, "/cart");

    let state = ctx.state.cart().state().await;
    assert_eq!(state.items[0].quantity, 4);
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let ctx = TestContext::new().await;

    ctx.post_form("/cart/add", &[("book_id", "1"), ("quantity", "2")])
        .await;
    ctx.post_form("/cart/update", &[("book_id", "1"), ("quantity", "0")])
        .await;

    assert!(ctx.state.cart().state().await.is_empty());
}

#[tokio::test]
async fn test_remove_line() {
    let ctx = TestContext::new().await;

    ctx.post_form("/cart/add", &[("book_id", "1"), ("quantity", "1")])
        .await;
    ctx.post_form("/cart/add", &[("book_id", "3"), ("quantity", "1")])
        .await;
    ctx.post_form("/cart/remove", &[("book_id", "1")]).await;

    let state = ctx.state.cart().state().await;
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].book.id.as_str(), "3");
}

#[tokio::test]
async fn test_clear_cart() {
    let ctx = TestContext::new().await;

    ctx.post_form("/cart/add", &[("book_id", "1"), ("quantity", "1")])
        .await;
    let response = ctx.post_form("/cart/clear", &[]).await;
    assert_redirect(&response, "/cart");

    assert!(ctx.state.cart().state().await.is_empty());
}

#[tokio::test]
async fn test_cart_totals_below_free_shipping() {
    let ctx = TestContext::new().await;

    // Pride and Prejudice: 9.99, below the 25.00 threshold
    ctx.post_form("/cart/add", &[("book_id", "5"), ("quantity", "1")])
        .await;

    let body = ctx.get_text("/cart").await;
    assert!(body.contains("$9.99"));
    assert!(body.contains("$4.99"));
    // tax: 9.99 * 0.08 = 0.80
    assert!(body.contains("$0.80"));
    // total: 9.99 + 4.99 + 0.80
    assert!(body.contains("$15.78"));
}

#[tokio::test]
async fn test_cart_totals_with_free_shipping() {
    let ctx = TestContext::new().await;

    // 2 x 18.99 = 37.98, free shipping; tax 3.04; total 41.02
    ctx.post_form("/cart/add", &[("book_id", "3"), ("quantity", "2")])
        .await;

    let body = ctx.get_text("/cart").await;
    assert!(body.contains("$37.98"));
    assert!(body.contains("Free"));
    assert!(body.contains("$3.04"));
    assert!(body.contains("$41.02"));
}

#[tokio::test]
async fn test_listing_card_shows_in_cart() {
    let ctx = TestContext::new().await;

    ctx.post_form("/cart/add", &[("book_id", "1"), ("quantity", "1")])
        .await;

    let body = ctx.get_text("/books?search=gatsby").await;
    assert!(body.contains("In Cart"));

    let detail = ctx.get_text("/books/1").await;
    assert!(detail.contains("Already in Cart"));
}
