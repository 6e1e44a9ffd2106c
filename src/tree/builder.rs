//! JSON value to node/edge lists.

use log::debug;

use super::path::{self, PathSegment};
use super::types::{GraphEdge, GraphNode, JsonGraph, NodeId};
use super::value::JsonValue;

/// A value waiting on the work stack, with everything needed to emit it.
struct Pending<'a> {
	value: &'a JsonValue,
	parent: Option<NodeId>,
	key_name: Option<String>,
	path: String,
	depth: usize,
}

/// Walks a document in pre-order and numbers nodes as it goes.
///
/// The id counter lives in the builder, so every [`build`] starts again from
/// `node-0` and concurrent builds never share state.
#[derive(Default)]
pub struct GraphBuilder {
	next_id: usize,
	graph: JsonGraph,
}

impl GraphBuilder {
	fn allocate(&mut self) -> NodeId {
		let id = NodeId(self.next_id);
		self.next_id += 1;
		id
	}

	/// Builds the graph for `root`. Uses an explicit stack, so document depth
	/// does not grow the call stack.
	pub fn build(mut self, root: &JsonValue) -> JsonGraph {
		let mut stack = vec![Pending {
			value: root,
			parent: None,
			key_name: None,
			path: path::ROOT.to_string(),
			depth: 0,
		}];

		while let Some(pending) = stack.pop() {
			let id = self.emit(&pending);
			let depth = pending.depth + 1;

			// Children go on in reverse so the first one is popped next.
			match pending.value {
				JsonValue::Object(members) => {
					for (key, value) in members.iter().rev() {
						let segment = PathSegment::Key(key);
						stack.push(Pending {
							value,
							parent: Some(id),
							key_name: Some(segment.key_name()),
							path: segment.child_of(&pending.path),
							depth,
						});
					}
				}
				JsonValue::Array(items) => {
					for (index, value) in items.iter().enumerate().rev() {
						let segment = PathSegment::Index(index);
						stack.push(Pending {
							value,
							parent: Some(id),
							key_name: Some(segment.key_name()),
							path: segment.child_of(&pending.path),
							depth,
						});
					}
				}
				JsonValue::Primitive(_) => {}
			}
		}

		debug!(
			"built json graph: {} nodes, {} edges",
			self.graph.nodes.len(),
			self.graph.edges.len()
		);
		self.graph
	}

	fn emit(&mut self, pending: &Pending<'_>) -> NodeId {
		let id = self.allocate();
		let kind = pending.value.kind();
		let value = match pending.value {
			JsonValue::Primitive(scalar) => Some(scalar.clone()),
			_ => None,
		};

		self.graph.nodes.push(GraphNode {
			id,
			kind,
			label: label(pending.value, pending.key_name.as_deref()),
			value,
			path: pending.path.clone(),
			key_name: pending.key_name.clone(),
			depth: pending.depth,
		});
		if let Some(source) = pending.parent {
			self.graph.edges.push(GraphEdge { source, target: id });
		}
		id
	}
}

/// Builds the node and edge lists for a document.
pub fn build(root: &JsonValue) -> JsonGraph {
	GraphBuilder::default().build(root)
}

/// `key: literal`, `key {}`, `key []`, or the bare form for the root.
fn label(value: &JsonValue, key: Option<&str>) -> String {
	match (value, key) {
		(JsonValue::Primitive(scalar), Some(key)) => format!("{key}: {}", scalar.literal()),
		(JsonValue::Primitive(scalar), None) => scalar.literal(),
		(JsonValue::Object(_), Some(key)) => format!("{key} {{}}"),
		(JsonValue::Object(_), None) => "{}".to_string(),
		(JsonValue::Array(_), Some(key)) => format!("{key} []"),
		(JsonValue::Array(_), None) => "[]".to_string(),
	}
}
