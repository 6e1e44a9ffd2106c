//! Parsed JSON documents as a three-way tagged union.
//!
//! Classification into object, array or primitive happens once, when a
//! [`serde_json::Value`] is converted, so the traversal never re-inspects
//! runtime types.

use serde_json::{Number, Value};

/// A parsed JSON document.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	/// Members in iteration order: array-index keys (`0`, `7`, `12`) first by
	/// increasing value, then every other key in document order. Keys are
	/// unique.
	Object(Vec<(String, JsonValue)>),
	/// Elements by increasing index.
	Array(Vec<JsonValue>),
	/// Any non-container value, `null` included.
	Primitive(Scalar),
}

/// A JSON leaf value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
	/// `null`
	Null,
	/// `true` / `false`
	Bool(bool),
	/// Any JSON number.
	Number(Number),
	/// A string, unescaped.
	String(String),
}

impl JsonValue {
	/// Node kind this value is rendered as.
	pub fn kind(&self) -> super::NodeKind {
		match self {
			JsonValue::Object(_) => super::NodeKind::Object,
			JsonValue::Array(_) => super::NodeKind::Array,
			JsonValue::Primitive(_) => super::NodeKind::Primitive,
		}
	}
}

impl Scalar {
	/// The JSON text of this value, as shown in node labels.
	///
	/// Numbers read as they would after a round trip through a double:
	/// integral floats drop their fractional part (`1.0` reads `1`), negative
	/// zero reads `0`, and integers beyond 2^53 take the nearest double's
	/// shortest digits.
	pub fn literal(&self) -> String {
		match self {
			Scalar::Null => "null".to_string(),
			Scalar::Bool(b) => b.to_string(),
			Scalar::Number(n) => number_literal(n),
			Scalar::String(s) => Value::String(s.clone()).to_string(),
		}
	}
}

/// Integers up to this magnitude are exact in a double.
const EXACT_INTEGER_LIMIT: u64 = 1 << 53;

fn number_literal(n: &Number) -> String {
	let exact = match (n.as_u64(), n.as_i64()) {
		(Some(u), _) => u <= EXACT_INTEGER_LIMIT,
		(None, Some(i)) => i.unsigned_abs() <= EXACT_INTEGER_LIMIT,
		(None, None) => false,
	};
	if exact {
		return n.to_string();
	}
	match n.as_f64() {
		Some(f) if f == 0.0 => "0".to_string(),
		// Display prints the shortest round-trip digits, zero-padded.
		Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f}"),
		_ => n.to_string(),
	}
}

/// `Some(i)` when `key` is a canonical array index: `0`, or digits without a
/// leading zero, at most 2^32 - 2.
fn array_index(key: &str) -> Option<u32> {
	let canonical = !key.is_empty()
		&& key.bytes().all(|b| b.is_ascii_digit())
		&& (key == "0" || !key.starts_with('0'));
	if !canonical {
		return None;
	}
	key.parse::<u32>().ok().filter(|&i| i != u32::MAX)
}

impl From<Value> for JsonValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => {
				let mut members: Vec<(String, JsonValue)> =
					map.into_iter().map(|(k, v)| (k, v.into())).collect();
				// Stable, so non-index keys keep their relative order.
				members.sort_by_key(|(key, _)| array_index(key).map_or((1, 0), |i| (0, i)));
				JsonValue::Object(members)
			}
			Value::Array(items) => JsonValue::Array(items.into_iter().map(Into::into).collect()),
			Value::Null => JsonValue::Primitive(Scalar::Null),
			Value::Bool(b) => JsonValue::Primitive(Scalar::Bool(b)),
			Value::Number(n) => JsonValue::Primitive(Scalar::Number(n)),
			Value::String(s) => JsonValue::Primitive(Scalar::String(s)),
		}
	}
}
