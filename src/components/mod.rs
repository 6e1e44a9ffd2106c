pub mod info_panel;
pub mod json_input;
pub mod search_bar;
pub mod theme_toggle;
pub mod toast;
pub mod toolbar;
pub mod tree_canvas;
