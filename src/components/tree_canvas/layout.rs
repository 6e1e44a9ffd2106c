use crate::tree::{GraphEdge, GraphNode};

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

/// Places nodes for drawing. Positions are indexed like `nodes`.
pub trait Layout {
	fn compute(&self, nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<Position>;
}

/// Top-down layered tree: one row per depth, leaves spread evenly in
/// pre-order, each parent centred over its first and last child. The root
/// sits at the origin.
#[derive(Clone, Copy, Debug)]
pub struct TreeLayout {
	pub level_gap: f64,
	pub sibling_gap: f64,
}

impl Layout for TreeLayout {
	fn compute(&self, nodes: &[GraphNode], edges: &[GraphEdge]) -> Vec<Position> {
		let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
		for edge in edges {
			if let Some(list) = children.get_mut(edge.source.index()) {
				list.push(edge.target.index());
			}
		}

		let mut positions: Vec<Position> = nodes
			.iter()
			.map(|n| Position {
				x: 0.0,
				y: n.depth as f64 * self.level_gap,
			})
			.collect();

		// Ids are pre-order: leaves ascending are left to right, and every
		// child has a larger index than its parent.
		let mut slot = 0.0;
		for (i, kids) in children.iter().enumerate() {
			if kids.is_empty() {
				positions[i].x = slot * self.sibling_gap;
				slot += 1.0;
			}
		}
		for (i, kids) in children.iter().enumerate().rev() {
			if let (Some(&first), Some(&last)) = (kids.first(), kids.last()) {
				positions[i].x = (positions[first].x + positions[last].x) / 2.0;
			}
		}

		if let Some(root_x) = positions.first().map(|p| p.x) {
			for p in &mut positions {
				p.x -= root_x;
			}
		}
		positions
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::tree::{JsonValue, build};

	const LAYOUT: TreeLayout = TreeLayout {
		level_gap: 10.0,
		sibling_gap: 20.0,
	};

	fn layout(value: serde_json::Value) -> Vec<Position> {
		let graph = build(&JsonValue::from(value));
		LAYOUT.compute(&graph.nodes, &graph.edges)
	}

	#[test]
	fn single_node_at_origin() {
		assert_eq!(layout(json!(1)), [Position { x: 0.0, y: 0.0 }]);
	}

	#[test]
	fn parent_centred_over_children() {
		// $, $.a, $.a[0], $.a[1], $.b
		let p = layout(json!({"a": [1, 2], "b": 3}));
		assert_eq!(p.len(), 5);
		assert_eq!(p[2].x + 20.0, p[3].x);
		assert_eq!(p[1].x, (p[2].x + p[3].x) / 2.0);
		assert_eq!(p[0].x, 0.0);
		assert_eq!(p[0].x, (p[1].x + p[4].x) / 2.0);
		assert_eq!(p[2].y, 20.0);
		assert_eq!(p[4].y, 10.0);
	}

	#[test]
	fn leaves_never_overlap() {
		let p = layout(json!([[1, 2, 3], {}, [[4]]]));
		let graph = build(&JsonValue::from(json!([[1, 2, 3], {}, [[4]]])));
		let mut leaf_xs: Vec<f64> = graph
			.nodes
			.iter()
			.filter(|n| !graph.edges.iter().any(|e| e.source == n.id))
			.map(|n| p[n.id.index()].x)
			.collect();
		let sorted = {
			let mut s = leaf_xs.clone();
			s.sort_by(f64::total_cmp);
			s
		};
		assert_eq!(leaf_xs, sorted);
		leaf_xs.dedup();
		assert_eq!(leaf_xs.len(), 5);
	}
}
