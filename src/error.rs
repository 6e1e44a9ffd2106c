//! Crate-wide error type.

use wasm_bindgen::JsValue;

/// Failures surfaced to the user as notifications.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("Input is empty")]
	EmptyInput,
	#[error("{message} at line {line}, column {column}")]
	Syntax {
		line: usize,
		column: usize,
		message: String,
	},
	#[error("clipboard unavailable: {0}")]
	Clipboard(String),
	#[error("failed to export image: {0}")]
	Export(String),
	#[error("browser api error: {0}")]
	Dom(String),
}

/// Convenience alias used across the crate.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

impl From<serde_json::Error> for AppError {
	fn from(err: serde_json::Error) -> Self {
		// serde_json appends " at line L column C" to its Display output.
		let text = err.to_string();
		let message = match text.rfind(" at line ") {
			Some(pos) => text[..pos].to_string(),
			None => text,
		};
		AppError::Syntax {
			line: err.line(),
			column: err.column(),
			message,
		}
	}
}

/// Best-effort text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
