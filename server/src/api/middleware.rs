//! HTTP middleware (CORS, 404 handler)

use axum::http::{Method, StatusCode, header};
use tower_http::cors::{Any, CorsLayer};

/// Create CORS layer.
///
/// Ingestion endpoints are called by SDKs, not browsers, so the policy is
/// permissive on origin and tight on methods.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

/// Handle 404 Not Found with logging
pub async fn handle_404(req: axum::extract::Request) -> StatusCode {
    tracing::debug!(method = %req.method(), uri = %req.uri(), "Route not found");
    StatusCode::NOT_FOUND
}
