// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Admin area pages

use crate::ServerResult;
use crate::state::AppState;
use crate::ui::nav::ClientNavigator;
use crate::ui::page::{Page, escape_text};
use crate::ui::redirect::RedirectView;
use axum::{
    extract::State,
    response::{Html, Redirect},
};

/// The login URL is not a form: it immediately forwards the client to the
/// dashboard behind a loading screen. The handler is the hosting controller
/// for [`RedirectView`]: construct, mount once, render the pending state.
pub async fn login(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let mut nav = ClientNavigator::new();
    let mut view = RedirectView::new(state.config.admin.dashboard_path.clone());
    view.mount(&mut nav);

    let page = Page::new("Redirecting")
        .with_refresh(&mut nav)
        .with_body(view.render());
    Ok(Html(page.render()))
}

/// Bare `/admin` goes straight to the dashboard; there is no pending state to
/// show, so this one is a plain HTTP redirect.
pub async fn index(State(state): State<AppState>) -> ServerResult<Redirect> {
    Ok(Redirect::temporary(&state.config.admin.dashboard_path))
}

/// Minimal dashboard page. Authentication and route protection are out of
/// scope; anything sensitive belongs behind a reverse proxy.
pub async fn dashboard(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let site_name = state
        .config
        .site
        .as_ref()
        .map(|site| site.name.as_str())
        .unwrap_or("Portico");

    let body = format!(
        "<main>\n\
         <h1>Dashboard</h1>\n\
         <p>Administration area for {}.</p>\n\
         </main>",
        escape_text(site_name)
    );
    Ok(Html(Page::new("Dashboard").with_body(body).render()))
}
