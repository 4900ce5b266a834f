//! Theme toggle route handler.

use axum::{
    extract::{Form, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::PrefersDark;
use crate::routes::local_redirect;
use crate::state::AppState;

/// Form payload for the theme toggle; `redirect` is the page to return to.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub redirect: Option<String>,
}

/// Flip the effective theme, persist it, and redirect back.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    PrefersDark(platform_dark): PrefersDark,
    Form(form): Form<ToggleForm>,
) -> Result<Redirect> {
    let dark = state.theme().toggle(platform_dark).await?;
    tracing::debug!(dark, "theme toggled");
    Ok(Redirect::to(&local_redirect(form.redirect, "/")))
}
