// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Public pages

use crate::ServerResult;
use crate::state::AppState;
use crate::ui::page::{Page, escape_text};
use crate::ui::structured::{Organization, structured_data};
use axum::{extract::State, response::Html};

/// Landing page. When the deployment has a configured site identity, the
/// page carries the Organization JSON-LD block for crawlers; otherwise it
/// carries no structured data at all.
pub async fn home(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let org = state
        .config
        .site
        .as_ref()
        .map(|site| Organization::new(site.name.clone(), site.url.clone()));
    let block = structured_data(org.as_ref())?;

    let title = state
        .config
        .site
        .as_ref()
        .map(|site| site.name.as_str())
        .unwrap_or("Portico");

    let body = format!(
        "<main>\n\
         <h1>{}</h1>\n\
         <p>Served by Portico.</p>\n\
         </main>",
        escape_text(title)
    );

    let page = Page::new(title).with_structured_data(block).with_body(body);
    Ok(Html(page.render()))
}

/// Crawler policy: public pages are crawlable, the admin area is not.
pub async fn robots() -> &'static str {
    "User-agent: *\nDisallow: /admin/\n"
}
