//! Tunables for the visualizer, provided to components as context.

use std::time::Duration;

/// Camera and interaction limits for the tree canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
	pub min_zoom: f64,
	pub max_zoom: f64,
	/// Factor applied per zoom-in / zoom-out step.
	pub zoom_step: f64,
	/// Fraction of the viewport left empty around a fitted tree.
	pub fit_padding: f64,
	/// Same, around a node focused by search.
	pub focus_padding: f64,
	pub view_duration: Duration,
	pub focus_duration: Duration,
	/// Vertical distance between tree levels, in world units.
	pub level_gap: f64,
	/// Horizontal distance between neighbouring leaves.
	pub sibling_gap: f64,
	/// Pointer travel (px) under which a press/release counts as a click.
	pub click_tolerance: f64,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			min_zoom: 0.1,
			max_zoom: 2.0,
			zoom_step: 1.2,
			fit_padding: 0.2,
			focus_padding: 0.3,
			view_duration: Duration::from_millis(300),
			focus_duration: Duration::from_millis(500),
			level_gap: 90.0,
			sibling_gap: 140.0,
			click_tolerance: 4.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerConfig {
	pub canvas: CanvasConfig,
	pub search_debounce: Duration,
	pub toast_ttl: Duration,
	pub export_filename: String,
}

impl Default for VisualizerConfig {
	fn default() -> Self {
		Self {
			canvas: CanvasConfig::default(),
			search_debounce: Duration::from_millis(250),
			toast_ttl: Duration::from_millis(3000),
			export_filename: "json-tree.png".to_string(),
		}
	}
}
