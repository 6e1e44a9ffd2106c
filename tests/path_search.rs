use json_tree_canvas::tree::{GraphNode, JsonValue, SearchOutcome, build, find, resolve};
use serde_json::json;

fn nodes() -> Vec<GraphNode> {
	build(&JsonValue::from(json!({
		"user": {"name": "Ada", "roles": ["admin", "dev"]},
		"items": [{"name": "first"}, {"name": "second"}]
	})))
	.nodes
}

fn found(query: &str) -> Option<String> {
	find(&nodes(), query).map(|n| n.path.clone())
}

#[test]
fn exact_paths_resolve() {
	assert_eq!(found("$.user.roles[1]").as_deref(), Some("$.user.roles[1]"));
	assert_eq!(found("$.items[1].name").as_deref(), Some("$.items[1].name"));
}

#[test]
fn partial_paths_take_the_first_structural_match() {
	assert_eq!(found("name").as_deref(), Some("$.user.name"));
	assert_eq!(found("items[0]").as_deref(), Some("$.items[0]"));
	assert_eq!(found("[1]").as_deref(), Some("$.user.roles[1]"));
}

#[test]
fn whitespace_anywhere_is_ignored() {
	assert_eq!(found("  $ . items [ 1 ] ").as_deref(), Some("$.items[1]"));
}

#[test]
fn misses_and_blank_queries() {
	assert_eq!(found("$.nope"), None);
	assert_eq!(found("\t \n"), None);
	let nodes = nodes();
	assert_eq!(resolve(&nodes, ""), SearchOutcome::Cleared);
	assert_eq!(resolve(&nodes, "$.nope"), SearchOutcome::NotFound);
}

#[test]
fn search_returns_the_node_itself() {
	let nodes = nodes();
	let node = find(&nodes, "$.user.name").expect("match");
	assert_eq!(node.label, "name: \"Ada\"");
	assert_eq!(node.key_name.as_deref(), Some("name"));
	assert_eq!(node.id.to_string(), "node-2");
}
