// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Page shell
//!
//! Assembles view markup into complete HTML documents. Pages are
//! self-contained: the stylesheet is inlined so no static asset route is
//! needed. All text interpolations go through [`escape_text`]; the one
//! deliberate raw insertion is the structured-data block, which is produced
//! by [`structured_data`](crate::ui::structured::structured_data) from
//! site-controlled payloads only.

use crate::ui::nav::ClientNavigator;

/// Shared inline stylesheet: document defaults, the redirect pending state,
/// and the sized spinner classes.
const STYLESHEET: &str = "\
:root{color-scheme:light dark}\
body{margin:0;font-family:system-ui,sans-serif}\
main{max-width:60rem;margin:0 auto;padding:2rem}\
.redirect-pending{min-height:100vh;display:flex;align-items:center;justify-content:center}\
.spinner{border-radius:50%;border:3px solid rgba(128,128,128,.25);border-top-color:currentColor;animation:spin .8s linear infinite}\
.spinner-sm{width:1rem;height:1rem;border-width:2px}\
.spinner-md{width:2rem;height:2rem}\
.spinner-lg{width:3.5rem;height:3.5rem;border-width:4px}\
@keyframes spin{to{transform:rotate(1turn)}}";

/// Escape a string for use in HTML text nodes and attribute values.
pub fn escape_text(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".into(),
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            other => other.to_string(),
        })
        .collect()
}

/// A complete HTML document assembled from parts.
#[derive(Debug, Default)]
pub struct Page {
    title: String,
    refresh: Option<String>,
    structured_data: Option<String>,
    body: String,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Adopt the pending destination from a [`ClientNavigator`], if any.
    /// The destination is emitted as a zero-delay meta-refresh in the head.
    pub fn with_refresh(mut self, nav: &mut ClientNavigator) -> Self {
        self.refresh = nav.take();
        self
    }

    /// Attach a pre-rendered structured-data block. `None` leaves the head
    /// untouched.
    pub fn with_structured_data(mut self, block: Option<String>) -> Self {
        self.structured_data = block;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Produce the full document.
    pub fn render(self) -> String {
        let mut head_extra = String::new();
        if let Some(dest) = &self.refresh {
            head_extra.push_str(&format!(
                "<meta http-equiv=\"refresh\" content=\"0; url={}\">\n",
                escape_text(dest)
            ));
        }
        if let Some(block) = &self.structured_data {
            head_extra.push_str(block);
            head_extra.push('\n');
        }

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n\
             {head_extra}\
             <style>{STYLESHEET}</style>\n\
             </head>\n\
             <body>\n\
             {body}\n\
             </body>\n\
             </html>\n",
            title = escape_text(&self.title),
            body = self.body,
        )
    }
}
