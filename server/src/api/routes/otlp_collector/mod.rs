//! OpenTelemetry Protocol (OTLP) HTTP ingestion endpoints

mod encoding;
mod traces;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use crate::domain::traces::TracePipeline;

#[derive(Clone)]
pub struct OtlpState {
    pub pipeline: Arc<TracePipeline>,
}

/// Build OTLP ingestion routes (mounted under `/otel/{project_id}/v1`)
pub fn routes(pipeline: Arc<TracePipeline>) -> Router {
    Router::new()
        .route("/traces", post(traces::export))
        .with_state(OtlpState { pipeline })
}
