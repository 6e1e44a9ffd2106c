use log::info;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

use crate::error::{AppError, Result, js_message};

/// Saves the canvas contents as a PNG download named `filename`.
pub fn export_canvas_png(canvas: &HtmlCanvasElement, filename: &str) -> Result<()> {
	let data_url = canvas
		.to_data_url_with_type("image/png")
		.map_err(|e| AppError::Export(js_message(&e)))?;
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| AppError::Dom("no document".into()))?;
	let link: HtmlAnchorElement = document
		.create_element("a")
		.map_err(|e| AppError::Dom(js_message(&e)))?
		.dyn_into()
		.map_err(|_| AppError::Dom("anchor has an unexpected type".into()))?;
	link.set_download(filename);
	link.set_href(&data_url);
	link.click();
	info!("exported {filename}");
	Ok(())
}
