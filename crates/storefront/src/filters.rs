//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Format a decimal amount as US dollars.
///
/// Usage in templates: `{{ book.price|usd }}` -> `$12.99`
#[askama::filter_fn]
pub fn usd(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${value:.2}"))
}

/// Render a 0-5 rating as star glyphs, filled by the floor of the rating.
///
/// Usage in templates: `{{ book.rating|stars }}` -> `★★★★☆`
#[askama::filter_fn]
pub fn stars(rating: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(render_stars(&rating.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_stars(rating: &str) -> String {
    let filled = rating
        .parse::<f64>()
        .map_or(0, |r| r.clamp(0.0, 5.0).floor() as usize);
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}
