use std::collections::HashSet;

use json_tree_canvas::tree::{JsonValue, NodeKind, build, find, parse_document};
use serde_json::{Value, json};
use test_case::test_case;

/// Object members plus array elements, recursively.
fn member_count(value: &Value) -> usize {
	match value {
		Value::Object(map) => map.len() + map.values().map(member_count).sum::<usize>(),
		Value::Array(items) => items.len() + items.iter().map(member_count).sum::<usize>(),
		_ => 0,
	}
}

fn sample() -> Value {
	json!({
		"user": {
			"id": 1,
			"name": "John Doe",
			"address": {"street": "123 Main St", "zipCode": "10001"}
		},
		"orders": [
			{"id": 101, "price": 999.99, "tags": []},
			{"id": 102, "price": 29.99, "tags": ["sale", null]}
		],
		"premium": true,
		"meta": {}
	})
}

#[test_case(json!(42) ; "root primitive")]
#[test_case(json!(null) ; "root null")]
#[test_case(json!({}) ; "empty object")]
#[test_case(json!([]) ; "empty array")]
#[test_case(json!([[[]], {"a": [1, {"b": 2}]}]) ; "mixed nesting")]
#[test_case(sample() ; "realistic document")]
fn shape_invariants(value: Value) {
	let graph = build(&JsonValue::from(value.clone()));

	assert!(!graph.nodes.is_empty());
	assert_eq!(graph.nodes.len(), 1 + member_count(&value));
	assert_eq!(graph.edges.len(), graph.nodes.len() - 1);

	let paths: HashSet<_> = graph.nodes.iter().map(|n| n.path.as_str()).collect();
	assert_eq!(paths.len(), graph.nodes.len(), "paths must be unique");

	// Every non-root node has exactly one incoming edge.
	let mut incoming = vec![0usize; graph.nodes.len()];
	for edge in &graph.edges {
		assert!(edge.source.index() < edge.target.index());
		incoming[edge.target.index()] += 1;
	}
	assert_eq!(incoming[0], 0);
	assert!(incoming[1..].iter().all(|&n| n == 1));
}

#[test]
fn rebuilding_yields_the_same_sequence() {
	let value = JsonValue::from(sample());
	let first = build(&value);
	let second = build(&value);
	let view = |g: &json_tree_canvas::tree::JsonGraph| {
		g.nodes
			.iter()
			.map(|n| (n.id.to_string(), n.kind, n.label.clone(), n.path.clone()))
			.collect::<Vec<_>>()
	};
	assert_eq!(view(&first), view(&second));
	assert_eq!(first.edges, second.edges);
}

#[test]
fn empty_containers_are_single_nodes() {
	let object = build(&JsonValue::from(json!({})));
	assert_eq!(object.nodes.len(), 1);
	assert_eq!(object.nodes[0].label, "{}");
	assert_eq!(object.nodes[0].kind, NodeKind::Object);

	let array = build(&JsonValue::from(json!([])));
	assert_eq!(array.nodes.len(), 1);
	assert_eq!(array.nodes[0].label, "[]");
	assert_eq!(array.nodes[0].kind, NodeKind::Array);
	assert!(array.edges.is_empty());
}

#[test]
fn parsed_text_keeps_key_order() {
	let value = parse_document(r#"{"zeta": 1, "alpha": {"b": 2, "a": 3}}"#).unwrap();
	let graph = build(&value);
	let paths: Vec<_> = graph.nodes.iter().map(|n| n.path.as_str()).collect();
	assert_eq!(paths, ["$", "$.zeta", "$.alpha", "$.alpha.b", "$.alpha.a"]);
}

#[test]
fn edge_ids_name_both_ends() {
	let graph = build(&JsonValue::from(json!({"a": 1})));
	assert_eq!(graph.edges[0].id(), "edge-node-0-node-1");
}

#[test]
fn index_like_keys_are_visited_first() {
	let value = parse_document(r#"{"b": 1, "10": 2, "2": 3}"#).unwrap();
	let graph = build(&value);
	let paths: Vec<_> = graph.nodes.iter().map(|n| n.path.as_str()).collect();
	assert_eq!(paths, ["$", "$.2", "$.10", "$.b"]);
	assert_eq!(graph.nodes[1].id.to_string(), "node-1");
	// The substring fallback follows the same order.
	assert_eq!(find(&graph.nodes, "$.").map(|n| n.path.as_str()), Some("$.2"));
}
