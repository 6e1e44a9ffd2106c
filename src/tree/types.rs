use std::fmt;

use super::value::Scalar;

/// Identifier of a node within one build: `node-0`, `node-1`, ...
///
/// Assigned in pre-order, so the number doubles as the node's index in
/// [`JsonGraph::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
	/// Position of the node in its graph's node list.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "node-{}", self.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Object,
	Array,
	Primitive,
}

impl NodeKind {
	pub fn as_str(self) -> &'static str {
		match self {
			NodeKind::Object => "object",
			NodeKind::Array => "array",
			NodeKind::Primitive => "primitive",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One visual unit of the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: NodeId,
	pub kind: NodeKind,
	/// Text drawn on the node, e.g. `name: "John"`, `orders []`, `{}`.
	pub label: String,
	/// Raw value, only for primitives.
	pub value: Option<Scalar>,
	/// Canonical address (`$`, `$.user.name`, `$.orders[0]`).
	pub path: String,
	/// Object key or bracketed index (`[3]`) this node was reached by.
	/// `None` for the root.
	pub key_name: Option<String>,
	/// Distance from the root.
	pub depth: usize,
}

/// Containment edge from a parent to one of its immediate children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphEdge {
	pub source: NodeId,
	pub target: NodeId,
}

impl GraphEdge {
	/// `edge-node-0-node-1`
	pub fn id(&self) -> String {
		format!("edge-{}-{}", self.source, self.target)
	}
}

/// Result of one build: nodes in pre-order and edges in traversal order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonGraph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

impl JsonGraph {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
