// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Shared helpers for integration tests

use portico_server::{Server, ServerConfig};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Spawn the server on an ephemeral port, returning its base URL and the
/// serving task. Dropping the handle detaches the task; tests just let the
/// runtime tear it down.
pub async fn spawn_server(config: ServerConfig) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind to ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let server = Server::new(config);
    let handle = tokio::spawn(async move {
        server.run_on(listener).await.expect("server run");
    });

    (format!("http://{}", addr), handle)
}
