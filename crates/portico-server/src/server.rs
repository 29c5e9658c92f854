// Copyright 2026 The Portico Authors
// SPDX-License-Identifier: AGPL-3.0-only

//! Main server implementation

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Web server for the public pages and the admin area
pub struct Server {
    config: ServerConfig,
    app: Router,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new(config.clone());
        let app = Self::build_app(state, &config);
        Self { config, app }
    }

    /// Build the Axum application with routes and middleware
    fn build_app(state: AppState, config: &ServerConfig) -> Router {
        // Build middleware stack
        let middleware_stack = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer({
                if config.enable_cors {
                    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
                } else {
                    // No grants: same-origin pages need nothing from CORS.
                    CorsLayer::new()
                }
            });

        let admin_routes = Router::new()
            .route("/", get(handlers::admin::index))
            .route("/login", get(handlers::admin::login))
            .route("/dashboard", get(handlers::admin::dashboard));

        Router::new()
            // Public pages
            .route("/", get(handlers::site::home))
            .route("/robots.txt", get(handlers::site::robots))
            // Health and status endpoints
            .route("/healthz", get(handlers::health::health_check))
            .route("/readyz", get(handlers::health::readiness_check))
            .route("/version", get(handlers::health::version))
            // Admin area
            .nest("/admin", admin_routes)
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(middleware_stack)
    }

    /// Run the server
    pub async fn run(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.run_on(listener).await
    }

    /// Serve on an already-bound listener. Tests bind to an ephemeral port
    /// themselves and hand the listener over, so they never race on ports.
    pub async fn run_on(self, listener: TcpListener) -> ServerResult<()> {
        let addr = listener.local_addr()?;
        info!("Starting server on {}", addr);

        axum::serve(listener, self.app)
            .await
            .map_err(|err| ServerError::Internal(format!("server error: {err}")))?;

        Ok(())
    }
}
