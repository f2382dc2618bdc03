//! Shared data types

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// An enriched span ready for storage.
///
/// `raw_span` holds the span's wire fields as JSON, with the flat attribute
/// list replaced by the reconstructed attribute tree. Correlation fields are
/// lifted out of the `phospho` attribute namespace; any of them may be null
/// after trace-level back-fill. Storage row ids are internal to the SQLite
/// layer and never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanRecord {
    pub org_id: String,
    pub project_id: String,
    pub raw_span: JsonValue,
    pub task_id: Option<String>,
    pub session_id: Option<String>,
    pub metadata: Option<JsonValue>,
}
