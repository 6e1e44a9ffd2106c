//! Browser side effects: clipboard writes and image export.

mod clipboard;
mod export;

pub use clipboard::copy_to_clipboard;
pub use export::export_canvas_png;
