//! Color-scheme client hint plumbing for the theme default.
//!
//! When no theme preference has been stored, the effective theme falls back
//! to the platform preference. Browsers report it via the
//! `Sec-CH-Prefers-Color-Scheme` client hint, which must be solicited with
//! `Accept-CH`/`Critical-CH` response headers first.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderName, HeaderValue, request::Parts},
    middleware::Next,
    response::Response,
};

/// The client hint header carrying the platform color-scheme preference.
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

/// Middleware that asks browsers to send the color-scheme hint.
pub async fn client_hints_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        HeaderName::from_static("accept-ch"),
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
    );
    // Critical-CH makes supporting browsers retry the first request with
    // the hint attached, so even the first page load resolves correctly.
    headers.insert(
        HeaderName::from_static("critical-ch"),
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
    );

    response
}

/// Extractor for the platform dark-mode preference.
///
/// `true` only when the client sent `Sec-CH-Prefers-Color-Scheme: dark`;
/// an absent or unrecognized hint means light.
#[derive(Debug, Clone, Copy)]
pub struct PrefersDark(pub bool);

impl<S> FromRequestParts<S> for PrefersDark
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let dark = parts
            .headers
            .get(PREFERS_COLOR_SCHEME)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim_matches('"') == "dark");
        Ok(Self(dark))
    }
}
