// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Portico web server binary

use clap::Parser;
use portico_logging::{CliLogLevel, Level, LogFormat, init};
use portico_server::config::{AdminConfig, SiteIdentity};
use portico_server::{Server, ServerConfig};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address for the server
    #[arg(short, long, default_value = "127.0.0.1:8780")]
    bind: SocketAddr,

    /// Path the admin login page forwards to
    #[arg(long, default_value = "/admin/dashboard")]
    dashboard_path: String,

    /// Organization name for the structured-data block on public pages
    #[arg(long, requires = "site_url")]
    site_name: Option<String>,

    /// Organization URL for the structured-data block on public pages
    #[arg(long, requires = "site_name")]
    site_url: Option<String>,

    /// Enable CORS for development
    #[arg(long)]
    cors: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: CliLogLevel,

    /// Log format
    #[arg(long, default_value = "plaintext")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level: Level = args.log_level.into();
    init("portico-server", default_level, args.log_format)?;

    tracing::info!("Starting Portico web server");

    // Both site fields arrive together or not at all; clap enforces it.
    let site = match (args.site_name, args.site_url) {
        (Some(name), Some(url)) => Some(SiteIdentity { name, url }),
        _ => None,
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        enable_cors: args.cors,
        admin: AdminConfig {
            dashboard_path: args.dashboard_path,
        },
        site,
    };

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}
