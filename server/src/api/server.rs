//! API server initialization

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::middleware;
use super::routes::{health, otlp_collector, tasks};
use crate::core::CoreApp;
use crate::core::constants::{DEFAULT_BODY_LIMIT, OTLP_BODY_LIMIT};
use crate::domain::traces::TracePipeline;

pub struct ApiServer {
    app: CoreApp,
}

impl ApiServer {
    pub fn new(app: CoreApp) -> Self {
        Self { app }
    }

    /// Returns CoreApp for graceful shutdown
    pub async fn start(self) -> Result<CoreApp> {
        let Self { app } = self;

        // Clone shutdown before moving app
        let shutdown = app.shutdown.clone();

        let host = app.config.server.host.clone();
        let port = app.config.server.port;
        let addr = SocketAddr::new(host.parse()?, port);

        let pipeline = Arc::new(TracePipeline::new(app.database.clone()));

        // OTLP ingestion routes get a raised body limit for large LLM traces
        let otlp_routes =
            otlp_collector::routes(pipeline).layer(DefaultBodyLimit::max(OTLP_BODY_LIMIT));

        let task_routes = tasks::routes(app.database.clone());

        let router = Router::new()
            .route("/api/v1/health", get(health::health))
            .nest("/otel/{project_id}/v1", otlp_routes)
            .nest("/api/v1/project/{project_id}/tasks", task_routes)
            .fallback(middleware::handle_404)
            .layer(TraceLayer::new_for_http())
            .layer(middleware::cors())
            .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT));

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        Ok(app)
    }
}
