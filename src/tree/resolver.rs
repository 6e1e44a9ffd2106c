//! Path search over a built node list.

use super::path::normalize;
use super::types::GraphNode;

/// What a search query resolved to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchOutcome<'a> {
	/// Blank query: drop any highlight, report nothing.
	Cleared,
	Found(&'a GraphNode),
	NotFound,
}

/// Finds the node addressed by `query`.
///
/// Whitespace is ignored on both sides. An exact path match anywhere in the
/// list wins; otherwise the first node, in list order, whose path contains
/// the query. So `name` finds `$.user.name`, and a short query lands on the
/// earliest structural match rather than the closest one.
pub fn find<'a>(nodes: &'a [GraphNode], query: &str) -> Option<&'a GraphNode> {
	let needle = normalize(query);
	if needle.is_empty() {
		return None;
	}

	let mut partial = None;
	for node in nodes {
		let path = normalize(&node.path);
		if path == needle {
			return Some(node);
		}
		if partial.is_none() && path.contains(&needle) {
			partial = Some(node);
		}
	}
	partial
}

/// [`find`], distinguishing a blank query from a miss.
pub fn resolve<'a>(nodes: &'a [GraphNode], query: &str) -> SearchOutcome<'a> {
	if query.trim().is_empty() {
		return SearchOutcome::Cleared;
	}
	match find(nodes, query) {
		Some(node) => SearchOutcome::Found(node),
		None => SearchOutcome::NotFound,
	}
}
