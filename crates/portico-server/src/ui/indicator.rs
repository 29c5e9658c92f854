// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Loading indicator widget
//!
//! A purely presentational spinner. The size enumeration only affects the
//! rendered dimensions; the animation itself lives in the shared stylesheet
//! emitted by the page shell.

/// Recognized indicator sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorSize {
    Sm,
    Md,
    Lg,
}

impl IndicatorSize {
    /// CSS class suffix for this size.
    pub fn class(self) -> &'static str {
        match self {
            IndicatorSize::Sm => "sm",
            IndicatorSize::Md => "md",
            IndicatorSize::Lg => "lg",
        }
    }
}

/// A spinner element sized by [`IndicatorSize`].
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    size: IndicatorSize,
}

impl LoadingIndicator {
    /// Create an indicator of the given size.
    pub fn new(size: IndicatorSize) -> Self {
        Self { size }
    }

    /// Markup for the spinner element.
    pub fn render(&self) -> String {
        format!(
            r#"<div class="spinner spinner-{}" role="status" aria-label="Loading"></div>"#,
            self.size.class()
        )
    }
}
