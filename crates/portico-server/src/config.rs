// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Server configuration

use std::net::SocketAddr;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,

    /// Enable permissive CORS headers for development
    pub enable_cors: bool,

    /// Admin area configuration
    pub admin: AdminConfig,

    /// Identity of the site owner, rendered as JSON-LD structured data on
    /// public pages. `None` disables the structured-data block entirely.
    pub site: Option<SiteIdentity>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8780".parse().unwrap(),
            enable_cors: false,
            admin: AdminConfig::default(),
            site: None,
        }
    }
}

/// Admin area configuration
///
/// The login page does not authenticate anyone; it exists so the historical
/// `/admin/login` URL keeps working and lands on the dashboard. The
/// destination is injectable so deployments and tests can point it elsewhere
/// without touching the view.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Path the login page forwards the client to.
    pub dashboard_path: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            dashboard_path: "/admin/dashboard".to_string(),
        }
    }
}

/// Site owner identity, the source of the Organization structured-data
/// payload. Both fields are operator-supplied configuration, never derived
/// from request input.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteIdentity {
    /// Organization name, e.g. "Acme"
    pub name: String,

    /// Canonical site URL
    pub url: String,
}
