use anyhow::Context;
use axum::{extract::State, response::Html};

use crate::{web::WebResult, AppState};

/// The landing document. The tagline is injected into the template so the
/// typing animation picks it up from the rendered markup.
pub async fn home(State(app_state): State<AppState>) -> WebResult<Html<String>> {
    let mut ctx = tera::Context::new();
    ctx.insert("tagline", app_state.templ_mgr.tagline());

    let body = app_state
        .templ_mgr
        .render_html_to_string("home.html", &ctx)
        .context("tera failed to render 'html/home.html' template")?;

    Ok(Html(body))
}
