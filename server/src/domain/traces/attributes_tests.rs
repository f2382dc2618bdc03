use opentelemetry_proto::tonic::common::v1::{AnyValue, ArrayValue, KeyValue, KeyValueList, any_value};
use serde_json::json;

use super::build_attribute_tree;

fn string_attr(key: &str, value: &str) -> KeyValue {
    KeyValue {
        key: key.to_string(),
        value: Some(AnyValue {
            value: Some(any_value::Value::StringValue(value.to_string())),
        }),
    }
}

fn int_attr(key: &str, value: i64) -> KeyValue {
    KeyValue {
        key: key.to_string(),
        value: Some(AnyValue {
            value: Some(any_value::Value::IntValue(value)),
        }),
    }
}

fn tree_json(attributes: &[KeyValue]) -> serde_json::Value {
    serde_json::Value::Object(build_attribute_tree(attributes))
}

#[test]
fn test_flat_keys() {
    let tree = tree_json(&[string_attr("model", "gpt-4"), int_attr("tokens", 42)]);
    assert_eq!(tree, json!({"model": "gpt-4", "tokens": 42}));
}

#[test]
fn test_nested_maps() {
    let tree = tree_json(&[
        string_attr("gen_ai.system", "openai"),
        string_attr("gen_ai.request.model", "gpt-4"),
    ]);
    assert_eq!(
        tree,
        json!({"gen_ai": {"system": "openai", "request": {"model": "gpt-4"}}})
    );
}

#[test]
fn test_sequence_of_maps() {
    // The canonical chat-message shape
    let tree = tree_json(&[
        string_attr("gen_ai.prompt.0.role", "system"),
        string_attr("gen_ai.prompt.0.content", "be brief"),
        string_attr("gen_ai.prompt.1.role", "user"),
        string_attr("gen_ai.prompt.1.content", "hi"),
    ]);
    assert_eq!(
        tree,
        json!({"gen_ai": {"prompt": [
            {"role": "system", "content": "be brief"},
            {"role": "user", "content": "hi"}
        ]}})
    );
}

#[test]
fn test_sequence_padding_for_out_of_order_index() {
    let tree = tree_json(&[string_attr("a.2.x", "v")]);
    assert_eq!(tree, json!({"a": [{}, {}, {"x": "v"}]}));
}

#[test]
fn test_final_digit_segment_is_map_key() {
    // A trailing index still assigns into a map inside the sequence slot
    let tree = tree_json(&[string_attr("a.0", "v")]);
    assert_eq!(tree, json!({"a": [{"0": "v"}]}));
}

#[test]
fn test_consecutive_digit_segments_collapse() {
    // Interior digits after the first only select positions; nested bare
    // sequences cannot be expressed
    let tree = tree_json(&[string_attr("a.0.1.x", "v")]);
    assert_eq!(tree, json!({"a": [{"x": "v"}]}));
}

#[test]
fn test_leaf_overwrite_keeps_last_value() {
    let tree = tree_json(&[string_attr("k", "first"), string_attr("k", "second")]);
    assert_eq!(tree, json!({"k": "second"}));
}

#[test]
fn test_deterministic_and_idempotent() {
    let attrs = vec![
        string_attr("gen_ai.prompt.0.role", "user"),
        string_attr("phospho.task_id", "t1"),
        int_attr("gen_ai.usage.input_tokens", 10),
    ];
    let once = tree_json(&attrs);
    let again = tree_json(&attrs);
    assert_eq!(once, again);

    // Feeding the list twice in a row equals feeding it once
    let doubled: Vec<_> = attrs.iter().chain(attrs.iter()).cloned().collect();
    assert_eq!(tree_json(&doubled), once);
}

#[test]
fn test_scalar_types() {
    let attrs = vec![
        KeyValue {
            key: "b".to_string(),
            value: Some(AnyValue {
                value: Some(any_value::Value::BoolValue(true)),
            }),
        },
        KeyValue {
            key: "d".to_string(),
            value: Some(AnyValue {
                value: Some(any_value::Value::DoubleValue(1.5)),
            }),
        },
        int_attr("i", -3),
    ];
    assert_eq!(tree_json(&attrs), json!({"b": true, "d": 1.5, "i": -3}));
}

#[test]
fn test_array_value() {
    let attrs = vec![KeyValue {
        key: "tags".to_string(),
        value: Some(AnyValue {
            value: Some(any_value::Value::ArrayValue(ArrayValue {
                values: vec![
                    AnyValue {
                        value: Some(any_value::Value::StringValue("a".to_string())),
                    },
                    AnyValue {
                        value: Some(any_value::Value::IntValue(1)),
                    },
                ],
            })),
        }),
    }];
    assert_eq!(tree_json(&attrs), json!({"tags": ["a", 1]}));
}

#[test]
fn test_unsupported_value_types_are_dropped() {
    let attrs = vec![
        KeyValue {
            key: "kvlist".to_string(),
            value: Some(AnyValue {
                value: Some(any_value::Value::KvlistValue(KeyValueList { values: vec![] })),
            }),
        },
        KeyValue {
            key: "bytes".to_string(),
            value: Some(AnyValue {
                value: Some(any_value::Value::BytesValue(vec![1, 2, 3])),
            }),
        },
        KeyValue {
            key: "absent".to_string(),
            value: Some(AnyValue { value: None }),
        },
        KeyValue {
            key: "missing".to_string(),
            value: None,
        },
        string_attr("kept", "yes"),
    ];
    assert_eq!(tree_json(&attrs), json!({"kept": "yes"}));
}

#[test]
fn test_non_finite_double_is_dropped() {
    let attrs = vec![
        KeyValue {
            key: "nan".to_string(),
            value: Some(AnyValue {
                value: Some(any_value::Value::DoubleValue(f64::NAN)),
            }),
        },
        string_attr("kept", "yes"),
    ];
    assert_eq!(tree_json(&attrs), json!({"kept": "yes"}));
}

#[test]
fn test_map_sequence_conflict_drops_attribute() {
    // "a" is established as a sequence; a map-shaped sibling is dropped
    let tree = tree_json(&[string_attr("a.0.x", "v"), string_attr("a.b", "w")]);
    assert_eq!(tree, json!({"a": [{"x": "v"}]}));

    // Mirror case: "m" established as a map, sequence sibling dropped
    let tree = tree_json(&[string_attr("m.b", "w"), string_attr("m.0.x", "v")]);
    assert_eq!(tree, json!({"m": {"b": "w"}}));
}

#[test]
fn test_scalar_prefix_conflict_drops_attribute() {
    let tree = tree_json(&[int_attr("a", 1), string_attr("a.b", "v")]);
    assert_eq!(tree, json!({"a": 1}));
}

#[test]
fn test_excessive_index_drops_attribute() {
    let tree = tree_json(&[
        string_attr("a.999999999.x", "v"),
        string_attr("a.0.x", "kept"),
    ]);
    assert_eq!(tree, json!({"a": [{"x": "kept"}]}));
}

#[test]
fn test_malformed_key_does_not_abort_neighbors() {
    let tree = tree_json(&[
        int_attr("a", 1),
        string_attr("a.b.c", "dropped"),
        string_attr("z", "kept"),
    ]);
    assert_eq!(tree, json!({"a": 1, "z": "kept"}));
}

#[test]
fn test_empty_attribute_list() {
    assert_eq!(tree_json(&[]), json!({}));
}
