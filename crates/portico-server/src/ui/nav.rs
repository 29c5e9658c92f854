// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Navigation capability
//!
//! Views never move the client themselves; they ask a [`Navigator`] to do it.
//! The seam keeps view logic testable and leaves transport details (how the
//! browser is actually sent elsewhere) to the implementor.

/// The external collaborator responsible for changing the active route.
pub trait Navigator {
    /// Request a transition of the client to the route at `path`.
    ///
    /// Fire-and-forget: the transition happens asynchronously on the client,
    /// and failure modes (route not found, navigation blocked) are entirely
    /// the implementor's responsibility.
    fn push(&mut self, path: &str);
}

/// Navigator that defers the transition to the browser.
///
/// The pushed path is picked up by the page shell and emitted as a
/// `meta http-equiv="refresh"` tag, so the client navigates as soon as the
/// document loads while the pending markup stays visible.
#[derive(Debug, Default)]
pub struct ClientNavigator {
    pending: Option<String>,
}

impl ClientNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination recorded by the most recent `push`, if any.
    ///
    /// Consumes the pending destination; a second call returns `None`.
    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}

impl Navigator for ClientNavigator {
    fn push(&mut self, path: &str) {
        self.pending = Some(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_the_pending_destination() {
        let mut nav = ClientNavigator::new();
        nav.push("/admin/dashboard");

        assert_eq!(nav.take().as_deref(), Some("/admin/dashboard"));
        assert_eq!(nav.take(), None);
    }
}
