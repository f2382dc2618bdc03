//! Trace-level correlation fallback
//!
//! Instrumentation typically attaches `phospho.*` attributes to one span in
//! a trace (often the root) while the LLM spans underneath carry none. The
//! fallback remembers the correlation fields of the literally-last span
//! visited in traversal order and back-fills missing fields across the
//! whole batch after traversal.

use serde_json::Value as JsonValue;

use super::normalize::SpanCorrelation;
use crate::data::types::SpanRecord;

/// Correlation fields of the last span visited in a trace request
#[derive(Debug, Clone, Default)]
pub struct TraceFallback {
    task_id: Option<String>,
    session_id: Option<String>,
    metadata: Option<JsonValue>,
}

impl TraceFallback {
    /// Record a span's correlation fields.
    ///
    /// Wholesale replacement, not a merge: a later span with no fields at
    /// all clears the fallback. Runs for every span, exportable or not.
    pub fn observe(&mut self, correlation: &SpanCorrelation) {
        self.task_id = correlation.task_id.clone();
        self.session_id = correlation.session_id.clone();
        self.metadata = correlation.metadata.clone();
    }

    /// Back-fill null correlation fields across a record batch.
    ///
    /// Each field fills independently, but nothing fills unless the
    /// fallback holds both a task id and a session id. Half-correlated
    /// final spans are treated as not correlated at all. Non-null fields
    /// are never overwritten.
    pub fn apply(&self, records: &mut [SpanRecord]) {
        let (Some(task_id), Some(session_id)) = (self.task_id.as_ref(), self.session_id.as_ref())
        else {
            return;
        };

        for record in records.iter_mut() {
            if record.task_id.is_none() {
                record.task_id = Some(task_id.clone());
            }
            if record.session_id.is_none() {
                record.session_id = Some(session_id.clone());
            }
            if record.metadata.is_none() {
                record.metadata = self.metadata.clone();
            }
        }
    }
}
