// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Redirect view
//!
//! A page-level view whose only job is to forward the client somewhere else.
//! The hosting controller constructs it with the destination, mounts it once,
//! and renders the pending state; the client replaces the page when the
//! navigation completes, so the view has no terminal state of its own.

use crate::ui::indicator::{IndicatorSize, LoadingIndicator};
use crate::ui::nav::Navigator;

/// View that requests navigation to a configured destination on mount.
#[derive(Debug)]
pub struct RedirectView {
    destination: String,
    mounted: bool,
}

impl RedirectView {
    /// The destination is injected by the hosting controller, typically from
    /// [`AdminConfig`](crate::config::AdminConfig).
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            mounted: false,
        }
    }

    /// One-time initialization, invoked by the hosting controller after
    /// construction. Pushes the destination onto the navigator.
    ///
    /// Invariant: the navigator sees exactly one `push` per view instance.
    /// Mounting again is a no-op.
    pub fn mount(&mut self, nav: &mut dyn Navigator) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        nav.push(&self.destination);
    }

    /// Markup for the pending state: a large spinner, centered in a container
    /// that fills the viewport height. Rendered identically whether or not
    /// the navigation ultimately succeeds.
    pub fn render(&self) -> String {
        let indicator = LoadingIndicator::new(IndicatorSize::Lg).render();
        format!(r#"<div class="redirect-pending">{indicator}</div>"#)
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}
