// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! View components and page assembly
//!
//! This layer turns application data into markup. Handlers act as the hosting
//! controllers: they construct views, drive their lifecycle, and hand the
//! result to the page shell.
//!
//! - [`page`]: document shell and text escaping
//! - [`indicator`]: sized loading spinner
//! - [`nav`]: navigation capability seam
//! - [`redirect`]: view that forwards the client on mount
//! - [`structured`]: JSON-LD structured data for crawlers

pub mod indicator;
pub mod nav;
pub mod page;
pub mod redirect;
pub mod structured;
