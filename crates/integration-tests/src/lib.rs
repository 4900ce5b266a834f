//! Integration test harness for the ReadOra storefront.
//!
//! Each [`TestContext`] spins up a full storefront on an ephemeral port with
//! in-memory storage and the real catalog file, then talks to it over HTTP
//! with a non-redirect-following client so tests can assert on the redirects
//! themselves.
//!
//! ```bash
//! cargo test -p readora-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::Ipv4Addr;
use std::path::Path;

use readora_storefront::catalog::Catalog;
use readora_storefront::config::StorefrontConfig;
use readora_storefront::state::AppState;
use readora_storefront::storage::Storage;

/// A running storefront instance plus an HTTP client pointed at it.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
    /// The server's state, for asserting on storage from tests.
    pub state: AppState,
}

impl TestContext {
    /// Start a storefront on an ephemeral port with in-memory storage.
    ///
    /// # Panics
    ///
    /// Panics on any setup failure; tests cannot proceed without a server.
    pub async fn new() -> Self {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let content_dir = manifest_dir.join("../storefront/content");
        let static_dir = manifest_dir.join("../storefront/static");

        let config = StorefrontConfig {
            database_url: "sqlite::memory:".to_string(),
            host: Ipv4Addr::LOCALHOST.into(),
            port: 0,
            content_dir: content_dir.clone(),
            static_dir,
            sentry_dsn: None,
        };

        let storage = Storage::in_memory()
            .await
            .expect("in-memory storage should open");
        let catalog = Catalog::load(&content_dir).expect("catalog should load");
        let state = AppState::from_parts(config, catalog, storage)
            .await
            .expect("state should initialize");

        let app = readora_storefront::app(state.clone());

        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("ephemeral port should bind");
        let addr = listener.local_addr().expect("listener should have an addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("client should build");

        Self {
            client,
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a path.
    ///
    /// # Panics
    ///
    /// Panics if the request fails outright (connection error).
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("request should succeed")
    }

    /// GET a path and return the response body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body cannot be read.
    pub async fn get_text(&self, path: &str) -> String {
        self.get(path)
            .await
            .text()
            .await
            .expect("body should be readable")
    }

    /// POST a urlencoded form to a path.
    ///
    /// # Panics
    ///
    /// Panics if the request fails outright (connection error).
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("request should succeed")
    }
}

/// Assert that a response is a redirect to the given path.
///
/// # Panics
///
/// Panics if the status is not a redirect or the target differs.
pub fn assert_redirect(response: &reqwest::Response, target: &str) {
    assert!(
        response.status().is_redirection(),
        "expected redirect, got {}",
        response.status()
    );
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("redirect should carry a location header");
    assert_eq!(location, target);
}
