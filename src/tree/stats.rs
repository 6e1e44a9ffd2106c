use super::types::JsonGraph;

/// Summary figures shown in the info panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
	pub nodes: usize,
	pub edges: usize,
	/// Deepest node's distance from the root.
	pub depth: usize,
}

impl TreeStats {
	pub fn of(graph: &JsonGraph) -> Self {
		Self {
			nodes: graph.nodes.len(),
			edges: graph.edges.len(),
			depth: graph.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::tree::{JsonValue, build};

	#[test]
	fn counts_and_depth() {
		let graph = build(&JsonValue::from(json!({"a": [1, {"b": null}]})));
		assert_eq!(
			TreeStats::of(&graph),
			TreeStats {
				nodes: 5,
				edges: 4,
				depth: 3
			}
		);
	}

	#[test]
	fn empty_graph() {
		assert_eq!(TreeStats::of(&JsonGraph::default()), TreeStats::default());
	}
}
