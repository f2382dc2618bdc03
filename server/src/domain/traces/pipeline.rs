//! Trace ingestion pipeline
//!
//! Processes one whole OTLP trace request synchronously:
//!
//! 1. Best-effort append of the raw payload (audit trail; failure is
//!    logged and processing continues)
//! 2. Ordered traversal of resources, scopes, and spans, normalizing each
//!    span and threading the trace fallback accumulator
//! 3. Fallback back-fill across the collected batch
//! 4. Single transactional batch append (failure is the pipeline failure)

use std::sync::Arc;

use opentelemetry_proto::tonic::collector::trace::v1::ExportTraceServiceRequest;
use thiserror::Error;

use super::correlate::TraceFallback;
use super::normalize::normalize_span;
use crate::data::SqliteService;
use crate::data::sqlite::SqliteError;
use crate::data::sqlite::repositories::{raw_traces, spans};
use crate::data::types::SpanRecord;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to persist span batch: {0}")]
    Storage(#[from] SqliteError),
}

/// Synchronous trace ingestion pipeline
pub struct TracePipeline {
    database: Arc<SqliteService>,
}

impl TracePipeline {
    pub fn new(database: Arc<SqliteService>) -> Self {
        Self { database }
    }

    /// Process a trace request and return the number of spans accepted.
    ///
    /// The retry unit is the whole request: on a batch persist failure the
    /// caller may resubmit the request, and leaf-level overwrites make a
    /// resubmission converge to the same tree shapes.
    pub async fn process(
        &self,
        org_id: &str,
        project_id: &str,
        request: &ExportTraceServiceRequest,
    ) -> Result<usize, PipelineError> {
        self.store_raw_trace(org_id, project_id, request).await;

        let mut batch: Vec<SpanRecord> = Vec::new();
        let mut fallback = TraceFallback::default();

        for resource_spans in &request.resource_spans {
            for scope_spans in &resource_spans.scope_spans {
                for span in &scope_spans.spans {
                    let (correlation, record) = normalize_span(org_id, project_id, span);
                    fallback.observe(&correlation);
                    if let Some(record) = record {
                        batch.push(record);
                    }
                }
            }
        }

        fallback.apply(&mut batch);

        if batch.is_empty() {
            tracing::debug!(project_id, "No exportable spans in trace request");
            return Ok(0);
        }

        let count = batch.len();
        spans::insert_batch(self.database.pool(), &batch).await?;
        tracing::debug!(project_id, count, "Span batch persisted");

        Ok(count)
    }

    /// Append the raw payload before any enrichment.
    ///
    /// Best-effort: raw-trace persistence must never block span processing.
    async fn store_raw_trace(
        &self,
        org_id: &str,
        project_id: &str,
        request: &ExportTraceServiceRequest,
    ) {
        let payload = match serde_json::to_value(request) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, project_id, "Failed to serialize raw trace payload");
                return;
            }
        };

        if let Err(e) =
            raw_traces::insert_raw_trace(self.database.pool(), org_id, project_id, &payload).await
        {
            tracing::error!(error = %e, project_id, "Failed to persist raw trace, continuing");
        }
    }
}
