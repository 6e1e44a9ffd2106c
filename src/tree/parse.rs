//! Text to [`JsonValue`].

use crate::error::{AppError, Result};

use super::value::JsonValue;

/// Parses user-supplied JSON text.
///
/// Blank input is rejected as [`AppError::EmptyInput`]. Nesting deeper than
/// serde_json's recursion limit (128) is rejected as a syntax error, which
/// caps document depth before a graph is ever built.
pub fn parse_document(text: &str) -> Result<JsonValue> {
	if text.trim().is_empty() {
		return Err(AppError::EmptyInput);
	}
	let value: serde_json::Value = serde_json::from_str(text)?;
	Ok(value.into())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tree::Scalar;

	#[test]
	fn blank_input_is_empty() {
		assert!(matches!(parse_document(" \n\t"), Err(AppError::EmptyInput)));
	}

	#[test]
	fn syntax_errors_carry_position() {
		let err = parse_document("{\n  \"a\": ,\n}").unwrap_err();
		let AppError::Syntax { line, column, .. } = err else {
			panic!("expected a syntax error, got {err:?}");
		};
		assert_eq!(line, 2);
		assert!(column > 0);
	}

	#[test]
	fn scalar_documents_parse() {
		assert_eq!(
			parse_document("  true ").unwrap(),
			JsonValue::Primitive(Scalar::Bool(true))
		);
	}

	#[test]
	fn duplicate_keys_keep_last_value_in_first_position() {
		let JsonValue::Object(members) = parse_document(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap()
		else {
			panic!("expected an object");
		};
		assert_eq!(members.len(), 2);
		assert_eq!(members[0].0, "a");
		assert_eq!(members[0].1, JsonValue::Primitive(Scalar::Number(3.into())));
	}

	#[test]
	fn nesting_beyond_recursion_limit_is_rejected() {
		let text = format!("{}{}", "[".repeat(200), "]".repeat(200));
		assert!(matches!(parse_document(&text), Err(AppError::Syntax { .. })));
	}
}
