//! Span normalization
//!
//! Rebuilds each span's attribute tree, lifts correlation fields out of the
//! `phospho` namespace, and decides exportability from the presence of the
//! `gen_ai` namespace. Spans without `gen_ai` attributes (HTTP middleware,
//! database calls, other framework noise) still contribute their correlation
//! fields to the trace-level fallback but produce no record.

use opentelemetry_proto::tonic::trace::v1::Span;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::attributes::build_attribute_tree;
use super::keys;
use crate::data::types::SpanRecord;

/// Correlation fields extracted from a span's `phospho` namespace.
///
/// Extracted for every span in a trace, exportable or not, so the trace
/// fallback always reflects the literally-last span visited.
#[derive(Debug, Clone, Default)]
pub struct SpanCorrelation {
    pub task_id: Option<String>,
    pub session_id: Option<String>,
    pub metadata: Option<JsonValue>,
}

/// Normalize a single OTLP span.
///
/// Returns the span's correlation fields and, when the span carries any
/// `gen_ai.*` attribute, the enriched record to persist. When a record is
/// produced, a `phospho` sub-key inside its metadata object is stripped;
/// the returned correlation carries the stripped metadata too, so fallback
/// values never reintroduce it.
pub fn normalize_span(
    org_id: &str,
    project_id: &str,
    span: &Span,
) -> (SpanCorrelation, Option<SpanRecord>) {
    let tree = build_attribute_tree(&span.attributes);

    let mut correlation = SpanCorrelation::default();
    if let Some(ns) = tree.get(keys::PHOSPHO) {
        correlation.task_id = ns
            .get(keys::TASK_ID)
            .and_then(JsonValue::as_str)
            .map(String::from);
        correlation.session_id = ns
            .get(keys::SESSION_ID)
            .and_then(JsonValue::as_str)
            .map(String::from);
        correlation.metadata = ns.get(keys::METADATA).cloned();
    }

    if !tree.contains_key(keys::GEN_AI) {
        tracing::debug!(span_name = %span.name, "Span carries no gen_ai attributes, not exported");
        return (correlation, None);
    }

    if let Some(JsonValue::Object(metadata)) = correlation.metadata.as_mut() {
        metadata.remove(keys::PHOSPHO);
    }

    let record = SpanRecord {
        org_id: org_id.to_string(),
        project_id: project_id.to_string(),
        raw_span: raw_span_json(span, tree),
        task_id: correlation.task_id.clone(),
        session_id: correlation.session_id.clone(),
        metadata: correlation.metadata.clone(),
    };

    (correlation, Some(record))
}

/// Serialize the span's wire fields to JSON with the flat attribute list
/// replaced by the reconstructed tree.
fn raw_span_json(span: &Span, attributes: JsonMap<String, JsonValue>) -> JsonValue {
    let mut raw = match serde_json::to_value(span) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, span_name = %span.name, "Failed to serialize span fields");
            JsonValue::Object(JsonMap::new())
        }
    };

    if let Some(obj) = raw.as_object_mut() {
        obj.insert("attributes".to_string(), JsonValue::Object(attributes));
    }
    raw
}
