//! Page rendering and routing tests.

#![allow(clippy::unwrap_used)]

use readora_integration_tests::TestContext;

#[tokio::test]
async fn test_health_endpoints() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/health").await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");

    let response = ctx.get("/health/ready").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_home_page_renders() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/").await;

    assert!(body.contains("Featured Books"));
    assert!(body.contains("Why Choose ReadOra?"));
    // Featured rail shows the first four catalog books
    assert!(body.contains("The Great Gatsby"));
    assert!(body.contains("Project Hail Mary"));
}

#[tokio::test]
async fn test_books_listing_shows_all_books() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/books").await;

    assert!(body.contains("16 books found"));
    assert!(body.contains("Dune"));
    assert!(body.contains("Deep Work"));
}

#[tokio::test]
async fn test_books_listing_filters_by_search() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/books?search=dune").await;

    assert!(body.contains("1 book found"));
    assert!(body.contains("Dune"));
    assert!(!body.contains("The Hobbit"));
}

#[tokio::test]
async fn test_books_listing_filters_by_author_search() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/books?search=tolkien").await;

    assert!(body.contains("1 book found"));
    assert!(body.contains("The Hobbit"));
}

#[tokio::test]
async fn test_books_listing_filters_by_category() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/books?category=Science%20Fiction").await;

    assert!(body.contains("2 books found"));
    assert!(body.contains("Dune"));
    assert!(body.contains("Project Hail Mary"));
}

#[tokio::test]
async fn test_books_listing_unknown_filters_fall_back() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/books?category=Cooking&sortPrice=sideways&rating=banana").await;

    assert!(body.contains("16 books found"));
}

#[tokio::test]
async fn test_books_listing_zero_matches() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/books?search=zzzzzz").await;

    assert!(body.contains("0 books found"));
    assert!(body.contains("No books found"));
}

#[tokio::test]
async fn test_book_detail_page() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/books/3").await;

    assert!(body.contains("Dune"));
    assert!(body.contains("by Frank Herbert"));
    assert!(body.contains("978-0-441-17271-9"));
    assert!(body.contains("Add to Cart"));
    assert!(body.contains("Buy Now"));
}

#[tokio::test]
async fn test_unknown_book_detail_is_404() {
    let ctx = TestContext::new().await;
    let response = ctx.get("/books/does-not-exist").await;

    assert_eq!(response.status(), 404);
    let body = response.text().await.unwrap();
    assert!(body.contains("Book not found"));
    assert!(body.contains("Back to Books"));
}

#[tokio::test]
async fn test_out_of_stock_book_has_no_add_button() {
    let ctx = TestContext::new().await;
    // Beach Read is out of stock in the catalog
    let body = ctx.get_text("/books/6").await;

    assert!(body.contains("Out of Stock"));
    assert!(!body.contains("action=\"/cart/add\""));
}

#[tokio::test]
async fn test_categories_page_lists_all_with_counts() {
    let ctx = TestContext::new().await;
    let body = ctx.get_text("/categories").await;

    assert!(body.contains("Classic Literature"));
    assert!(body.contains("Business"));
    // Two books per category in the catalog
    assert!(body.contains("2 books"));
    assert!(body.contains("/books?category=Self-Help"));
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let ctx = TestContext::new().await;
    let response = ctx.get("/no-such-page").await;

    assert_eq!(response.status(), 404);
    let body = response.text().await.unwrap();
    assert!(body.contains("404"));
    assert!(body.contains("/no-such-page"));
}

#[tokio::test]
async fn test_security_and_client_hint_headers() {
    let ctx = TestContext::new().await;
    let response = ctx.get("/").await;
    let headers = response.headers();

    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert!(headers.contains_key("content-security-policy"));
    assert_eq!(
        headers.get("accept-ch").unwrap(),
        "Sec-CH-Prefers-Color-Scheme"
    );
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let ctx = TestContext::new().await;
    let response = ctx.get("/static/css/main.css").await;

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("html.dark"));
}
