// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Health, version, and crawler-policy endpoints.

use portico_server::ServerConfig;
use serde_json::Value;

mod common;
use common::spawn_server;

#[tokio::test]
async fn health_endpoints_report_status_with_timestamps() {
    let (base, _server) = spawn_server(ServerConfig::default()).await;

    let health: Value = reqwest::get(format!("{base}/healthz"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(health["status"], "ok");
    let timestamp = health["timestamp"].as_str().expect("timestamp is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());

    let ready: Value = reqwest::get(format!("{base}/readyz"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(ready["status"], "ready");
}

#[tokio::test]
async fn version_reports_the_package_version() {
    let (base, _server) = spawn_server(ServerConfig::default()).await;

    let version: Value = reqwest::get(format!("{base}/version"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn robots_txt_keeps_crawlers_out_of_the_admin_area() {
    let (base, _server) = spawn_server(ServerConfig::default()).await;

    let body = reqwest::get(format!("{base}/robots.txt"))
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Disallow: /admin/"));
}
