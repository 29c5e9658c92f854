// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Portico web server
//!
//! Portico serves a small public surface and an admin area. The interesting
//! part is the view layer: a redirect view that forwards the client behind a
//! loading screen, and a structured-data renderer that emits JSON-LD for
//! crawlers. Handlers host those views; everything else is the usual server
//! scaffolding (config, errors, middleware).

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod ui;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::Server;
