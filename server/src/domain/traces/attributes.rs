//! Attribute tree reconstruction
//!
//! OTLP instrumentation flattens nested structures into dotted keys, so a
//! chat payload arrives as `gen_ai.prompt.0.content = "hi"`. This module
//! rebuilds the nested form in a single pass over the attribute list.
//!
//! Shape rules:
//! - A segment whose *next* segment is all ASCII digits introduces a
//!   sequence; anything else introduces a map.
//! - Sequences are padded with empty maps up to the referenced index, so
//!   out-of-order arrivals land in the right slot.
//! - Interior digit segments only select positions (consecutive digit
//!   segments collapse; nested bare arrays cannot be expressed).
//! - The final segment is always a map-key assignment and overwrites.
//!
//! Everything here is fail-soft: a malformed key or unsupported value type
//! drops that one attribute and leaves the rest of the tree untouched.

use opentelemetry_proto::tonic::common::v1::{AnyValue, KeyValue, any_value};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::core::constants::ATTRIBUTE_MAX_SEQUENCE_INDEX;

/// Build a nested attribute tree from a flat dotted-key attribute list.
///
/// Deterministic for a given input order, and idempotent: feeding the same
/// list twice produces the same tree as feeding it once, since every leaf
/// write is an overwrite.
pub fn build_attribute_tree(attributes: &[KeyValue]) -> JsonMap<String, JsonValue> {
    let mut root = JsonMap::new();

    for attr in attributes {
        let value = match attr.value.as_ref().and_then(any_value_to_json) {
            Some(v) => v,
            None => {
                tracing::warn!(key = %attr.key, "Unsupported attribute value type, dropping attribute");
                continue;
            }
        };
        insert_path(&mut root, &attr.key, value);
    }

    root
}

/// Convert an OTLP `AnyValue` to JSON.
///
/// Only the closed set {string, int, bool, double, array} is accepted;
/// kvlist, bytes, absent values, and non-finite doubles yield `None`.
/// Unconvertible array elements are dropped individually.
fn any_value_to_json(value: &AnyValue) -> Option<JsonValue> {
    match value.value.as_ref()? {
        any_value::Value::StringValue(s) => Some(JsonValue::String(s.clone())),
        any_value::Value::BoolValue(b) => Some(JsonValue::Bool(*b)),
        any_value::Value::IntValue(i) => Some(JsonValue::Number((*i).into())),
        any_value::Value::DoubleValue(d) => serde_json::Number::from_f64(*d).map(JsonValue::Number),
        any_value::Value::ArrayValue(array) => Some(JsonValue::Array(
            array.values.iter().filter_map(any_value_to_json).collect(),
        )),
        _ => None,
    }
}

/// Insert a value at a dotted path, creating intermediate maps and
/// sequences as needed. Drops the attribute on any structural conflict.
fn insert_path(root: &mut JsonMap<String, JsonValue>, key: &str, value: JsonValue) {
    let segments: Vec<&str> = key.split('.').collect();

    let mut current = root;
    let mut i = 0;
    while i + 1 < segments.len() {
        let segment = segments[i];
        let next = segments[i + 1];

        if is_index_segment(segment) {
            // Position was already selected by the preceding segment's lookahead
            i += 1;
            continue;
        }

        current = match descend(current, key, segment, next) {
            Some(container) => container,
            None => return,
        };
        i += 1;
    }

    if let Some(last) = segments.last() {
        current.insert((*last).to_string(), value);
    }
}

/// Descend one level below `segment`, creating the container on first use.
///
/// Lookahead on `next` picks the container kind: a digit segment means
/// `segment` holds a sequence and `next` selects a position in it.
fn descend<'a>(
    current: &'a mut JsonMap<String, JsonValue>,
    key: &str,
    segment: &str,
    next: &str,
) -> Option<&'a mut JsonMap<String, JsonValue>> {
    if is_index_segment(next) {
        let Some(index) = parse_index(next) else {
            tracing::warn!(key, index = next, "Sequence index out of bounds, dropping attribute");
            return None;
        };

        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| JsonValue::Array(Vec::new()));
        let Some(sequence) = slot.as_array_mut() else {
            tracing::warn!(key, segment, "Key already holds a map, dropping sequence attribute");
            return None;
        };

        // Pad with empty maps so out-of-order indices land correctly
        while sequence.len() <= index {
            sequence.push(JsonValue::Object(JsonMap::new()));
        }

        let element = sequence.get_mut(index)?;
        match element.as_object_mut() {
            Some(obj) => Some(obj),
            None => {
                tracing::warn!(key, index, "Sequence position already holds a scalar, dropping attribute");
                None
            }
        }
    } else {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| JsonValue::Object(JsonMap::new()));
        match slot.as_object_mut() {
            Some(obj) => Some(obj),
            None => {
                tracing::warn!(key, segment, "Key already holds a non-map value, dropping attribute");
                None
            }
        }
    }
}

/// A segment made entirely of ASCII digits addresses a sequence position
fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

fn parse_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|&i| i <= ATTRIBUTE_MAX_SEQUENCE_INDEX)
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
