use js_sys::{Function, Promise, Reflect};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::error::{AppError, Result, js_message};

/// Writes `text` to the system clipboard.
///
/// Tries the async Clipboard API first (secure contexts only), then falls
/// back to a hidden textarea and `document.execCommand("copy")`.
pub async fn copy_to_clipboard(text: &str) -> Result<()> {
	match write_text(text).await {
		Ok(()) => return Ok(()),
		Err(err) => warn!("Clipboard API failed, trying fallback method: {err}"),
	}
	copy_with_exec_command(text)
}

async fn write_text(text: &str) -> Result<()> {
	let window = web_sys::window().ok_or_else(|| AppError::Dom("no window".into()))?;
	if !window.is_secure_context() {
		return Err(AppError::Clipboard("not a secure context".into()));
	}
	let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
		.map_err(|e| AppError::Clipboard(js_message(&e)))?;
	if clipboard.is_undefined() || clipboard.is_null() {
		return Err(AppError::Clipboard("navigator.clipboard is missing".into()));
	}
	let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
		.map_err(|e| AppError::Clipboard(js_message(&e)))?
		.dyn_into::<Function>()
		.map_err(|_| AppError::Clipboard("writeText is not a function".into()))?;
	let promise = write
		.call1(&clipboard, &JsValue::from_str(text))
		.map_err(|e| AppError::Clipboard(js_message(&e)))?
		.dyn_into::<Promise>()
		.map_err(|_| AppError::Clipboard("writeText did not return a promise".into()))?;
	JsFuture::from(promise)
		.await
		.map_err(|e| AppError::Clipboard(js_message(&e)))?;
	Ok(())
}

fn copy_with_exec_command(text: &str) -> Result<()> {
	let dom = |e: JsValue| AppError::Dom(js_message(&e));
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| AppError::Dom("no document".into()))?;
	let body = document
		.body()
		.ok_or_else(|| AppError::Dom("no document body".into()))?;

	let textarea: HtmlTextAreaElement = document
		.create_element("textarea")
		.map_err(dom)?
		.dyn_into()
		.map_err(|_| AppError::Dom("textarea has an unexpected type".into()))?;
	textarea.set_value(text);
	textarea.set_read_only(true);
	let _ = textarea.set_attribute(
		"style",
		"position: fixed; top: 0; left: 0; width: 2em; height: 2em; padding: 0; \
		 border: none; outline: none; box-shadow: none; background: transparent; opacity: 0;",
	);
	body.append_child(&textarea).map_err(dom)?;

	textarea.select();
	let _ = textarea.set_selection_range(0, text.encode_utf16().count() as u32);
	let copied = document
		.dyn_ref::<HtmlDocument>()
		.map(|doc| doc.exec_command("copy"))
		.unwrap_or(Ok(false));
	textarea.remove();

	match copied {
		Ok(true) => Ok(()),
		Ok(false) => Err(AppError::Clipboard("copy command was rejected".into())),
		Err(e) => Err(AppError::Clipboard(js_message(&e))),
	}
}
