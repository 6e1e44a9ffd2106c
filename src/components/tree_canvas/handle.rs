use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use log::warn;
use web_sys::HtmlCanvasElement;

use super::state::TreeCanvasState;
use crate::tree::NodeId;

/// Shared access to a mounted tree canvas, so toolbar and search can drive
/// the camera and selection without owning the surface.
#[derive(Clone)]
pub struct CanvasHandle {
	pub(super) state: Rc<RefCell<Option<TreeCanvasState>>>,
	pub(super) canvas: NodeRef<Canvas>,
	/// Outlives any one surface state; every rebuild adopts it.
	physics: RwSignal<bool>,
}

impl Default for CanvasHandle {
	fn default() -> Self {
		Self::new()
	}
}

impl CanvasHandle {
	pub fn new() -> Self {
		Self {
			state: Rc::new(RefCell::new(None)),
			canvas: NodeRef::new(),
			physics: RwSignal::new(false),
		}
	}

	/// Replaces the surface state, carrying over the physics setting.
	pub(super) fn install(&self, mut next: TreeCanvasState) {
		next.set_physics(self.physics.get_untracked());
		*self.state.borrow_mut() = Some(next);
	}

	fn with_state(&self, f: impl FnOnce(&mut TreeCanvasState)) {
		match self.state.borrow_mut().as_mut() {
			Some(state) => f(state),
			None => warn!("tree canvas is not mounted"),
		}
	}

	pub fn zoom_in(&self) {
		self.with_state(TreeCanvasState::zoom_in);
	}

	pub fn zoom_out(&self) {
		self.with_state(TreeCanvasState::zoom_out);
	}

	pub fn fit_view(&self) {
		self.with_state(TreeCanvasState::fit_view);
	}

	pub fn physics(&self) -> Signal<bool> {
		self.physics.into()
	}

	pub fn set_physics(&self, on: bool) {
		self.physics.set(on);
		if let Some(state) = self.state.borrow_mut().as_mut() {
			state.set_physics(on);
		}
	}

	pub fn toggle_physics(&self) {
		self.set_physics(!self.physics.get_untracked());
	}

	pub fn focus(&self, id: NodeId) {
		self.with_state(|s| {
			if !s.focus(id) {
				warn!("cannot focus {id}: not in the rendered graph");
			}
		});
	}

	pub fn clear_selection(&self) {
		self.with_state(TreeCanvasState::clear_selection);
	}

	pub fn canvas_element(&self) -> Option<HtmlCanvasElement> {
		self.canvas.get_untracked().map(Into::into)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::components::tree_canvas::layout::TreeLayout;
	use crate::config::CanvasConfig;
	use crate::tree::{JsonValue, build};

	fn surface(value: serde_json::Value) -> TreeCanvasState {
		let config = CanvasConfig::default();
		let layout = TreeLayout {
			level_gap: config.level_gap,
			sibling_gap: config.sibling_gap,
		};
		TreeCanvasState::new(&build(&JsonValue::from(value)), &layout, config, 800.0, 600.0)
	}

	fn physics_on(handle: &CanvasHandle) -> Option<bool> {
		handle.state.borrow().as_ref().map(|s| s.physics)
	}

	#[test]
	fn rebuilt_surface_keeps_physics_setting() {
		Owner::new().with(|| {
			let handle = CanvasHandle::new();
			handle.install(surface(json!({"a": 1})));
			handle.toggle_physics();
			assert_eq!(physics_on(&handle), Some(true));

			handle.install(surface(json!({"b": [1, 2]})));
			assert!(handle.physics().get_untracked());
			assert_eq!(physics_on(&handle), Some(true));

			handle.toggle_physics();
			assert!(!handle.physics().get_untracked());
			assert_eq!(physics_on(&handle), Some(false));
		});
	}

	#[test]
	fn physics_setting_applies_to_later_surface() {
		Owner::new().with(|| {
			let handle = CanvasHandle::new();
			handle.set_physics(true);
			assert_eq!(physics_on(&handle), None);
			handle.install(surface(json!([1])));
			assert_eq!(physics_on(&handle), Some(true));
		});
	}
}
