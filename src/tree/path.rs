//! Path grammar: `$` for the root, `.key` for object members, `[index]` for
//! array elements, concatenated left to right.

use std::fmt;

/// Path of the document root.
pub const ROOT: &str = "$";

/// One step from a container to a child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment<'a> {
	Key(&'a str),
	Index(usize),
}

impl PathSegment<'_> {
	/// Name under which the child is shown: the key itself, or `[i]`.
	pub fn key_name(&self) -> String {
		match self {
			PathSegment::Key(key) => (*key).to_string(),
			PathSegment::Index(i) => format!("[{i}]"),
		}
	}

	/// Appends this segment to `parent`, producing the child's path.
	pub fn child_of(&self, parent: &str) -> String {
		format!("{parent}{self}")
	}
}

impl fmt::Display for PathSegment<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PathSegment::Key(key) => write!(f, ".{key}"),
			PathSegment::Index(i) => write!(f, "[{i}]"),
		}
	}
}

/// Strips every whitespace character, so `$. user . name` compares equal to
/// `$.user.name`.
pub fn normalize(path: &str) -> String {
	path.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn segments_render_with_their_grammar() {
		let user = PathSegment::Key("user").child_of(ROOT);
		let name = PathSegment::Key("name").child_of(&user);
		let first = PathSegment::Index(0).child_of("$.items");
		assert_eq!(user, "$.user");
		assert_eq!(name, "$.user.name");
		assert_eq!(first, "$.items[0]");
	}

	#[test]
	fn key_names() {
		assert_eq!(PathSegment::Key("id").key_name(), "id");
		assert_eq!(PathSegment::Index(12).key_name(), "[12]");
	}

	#[test]
	fn normalize_drops_all_whitespace() {
		assert_eq!(normalize(" $. user .\tname\n"), "$.user.name");
		assert_eq!(normalize("   "), "");
	}
}
