use std::collections::HashSet;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::camera::{self, Bounds, CameraTween, ViewTransform};
use super::layout::Layout;
use crate::config::CanvasConfig;
use crate::theme::{Theme, kind_color};
use crate::tree::{JsonGraph, NodeId};

pub const NODE_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 12.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: String,
	pub path: String,
	pub color: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
	/// Set once the pointer leaves the click tolerance.
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct TreeCanvasState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	/// Force relaxation on top of the computed layout.
	pub physics: bool,
	pub flow_time: f64,
	/// Node picked by the last successful search.
	pub selected: Option<DefaultNodeIdx>,
	pub theme: Theme,
	camera: Option<CameraTween>,
	config: CanvasConfig,
	/// Simulation index per [`NodeId`].
	indices: Vec<DefaultNodeIdx>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl TreeCanvasState {
	pub fn new(
		data: &JsonGraph,
		layout: &impl Layout,
		config: CanvasConfig,
		width: f64,
		height: f64,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let positions = layout.compute(&data.nodes, &data.edges);
		let mut indices = Vec::with_capacity(data.nodes.len());
		let mut edges = Vec::with_capacity(data.edges.len());

		for (node, pos) in data.nodes.iter().zip(&positions) {
			let idx = graph.add_node(NodeData {
				x: pos.x as f32,
				y: pos.y as f32,
				mass: 10.0,
				is_anchor: true,
				user_data: NodeInfo {
					label: node.label.clone(),
					path: node.path.clone(),
					color: kind_color(node.kind),
				},
			});
			indices.push(idx);
		}

		for link in &data.edges {
			if let (Some(&src), Some(&tgt)) = (
				indices.get(link.source.index()),
				indices.get(link.target.index()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		let mut state = Self {
			graph,
			edges,
			indices,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			physics: false,
			flow_time: 0.0,
			selected: None,
			theme: Theme::default(),
			camera: None,
			config,
		};
		if let Some(target) = state.fitted_transform() {
			state.transform = target;
		}
		state
	}

	pub fn node_count(&self) -> usize {
		self.indices.len()
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn path_of(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.path.clone());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.camera = None;
		if let Some(idx) = self.node_at_position(x, y) {
			let (nx, ny) = self.node_position(idx).unwrap_or_default();
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: x,
				start_y: y,
				node_start_x: nx as f32,
				node_start_y: ny as f32,
				moved: false,
			};
		} else {
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		// Update hover state when not dragging
		if !self.drag.active {
			let hovered = self.node_at_position(x, y);
			self.set_hover(hovered);
		}

		if self.drag.active {
			let Some(idx) = self.drag.node_idx else {
				return;
			};
			let (sx, sy) = (x - self.drag.start_x, y - self.drag.start_y);
			if !self.drag.moved && (sx * sx + sy * sy).sqrt() < self.config.click_tolerance {
				return;
			}
			self.drag.moved = true;
			let (dx, dy) = (sx / self.transform.k, sy / self.transform.k);
			let (nx, ny) = (
				self.drag.node_start_x + dx as f32,
				self.drag.node_start_y + dy as f32,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
				}
			});
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	/// Ends a drag or pan. Returns the path of the node when the gesture was
	/// a click on it.
	pub fn pointer_up(&mut self) -> Option<String> {
		let clicked = match (self.drag.active, self.drag.node_idx, self.drag.moved) {
			(true, Some(idx), false) => self.path_of(idx),
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	pub fn pointer_leave(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.set_hover(None);
	}

	pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) {
		self.camera = None;
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		self.transform = camera::zoom_about(self.transform, x, y, factor, self.zoom_limits());
	}

	pub fn zoom_in(&mut self) {
		self.zoom_by(self.config.zoom_step);
	}

	pub fn zoom_out(&mut self) {
		self.zoom_by(1.0 / self.config.zoom_step);
	}

	fn zoom_by(&mut self, factor: f64) {
		let target = camera::zoom_about(
			self.camera_target(),
			self.width / 2.0,
			self.height / 2.0,
			factor,
			self.zoom_limits(),
		);
		self.animate_to(target, self.config.view_duration);
	}

	pub fn fit_view(&mut self) {
		if let Some(target) = self.fitted_transform() {
			self.animate_to(target, self.config.view_duration);
		}
	}

	/// Selects the node and moves the camera onto it. Returns false when the
	/// id is not part of this graph.
	pub fn focus(&mut self, id: NodeId) -> bool {
		let Some(&idx) = self.indices.get(id.index()) else {
			return false;
		};
		let Some((x, y)) = self.node_position(idx) else {
			return false;
		};
		self.selected = Some(idx);
		let bounds = Bounds::around(x, y).grow(self.config.sibling_gap / 2.0);
		let target = camera::fit(
			bounds,
			self.width,
			self.height,
			self.config.focus_padding,
			self.zoom_limits(),
		);
		self.animate_to(target, self.config.focus_duration);
		true
	}

	pub fn clear_selection(&mut self) {
		self.selected = None;
	}

	/// Lets the force simulation move nodes. The root stays pinned either way.
	pub fn set_physics(&mut self, on: bool) {
		self.physics = on;
		let root = self.indices.first().copied();
		self.graph.visit_nodes_mut(|node| {
			node.data.is_anchor = !on || Some(node.index()) == root;
		});
	}

	fn zoom_limits(&self) -> (f64, f64) {
		(self.config.min_zoom, self.config.max_zoom)
	}

	fn camera_target(&self) -> ViewTransform {
		self.camera
			.as_ref()
			.map(CameraTween::target)
			.unwrap_or(self.transform)
	}

	fn animate_to(&mut self, target: ViewTransform, duration: std::time::Duration) {
		self.camera = Some(CameraTween::new(self.transform, target, duration));
	}

	fn fitted_transform(&self) -> Option<ViewTransform> {
		let mut bounds: Option<Bounds> = None;
		self.graph.visit_nodes(|node| {
			let (x, y) = (node.x() as f64, node.y() as f64);
			match bounds.as_mut() {
				Some(b) => b.include(x, y),
				None => bounds = Some(Bounds::around(x, y)),
			}
		});
		bounds.map(|b| {
			camera::fit(
				b.grow(HIT_RADIUS),
				self.width,
				self.height,
				self.config.fit_padding,
				self.zoom_limits(),
			)
		})
	}

	pub fn tick(&mut self, dt: f32) {
		if self.physics {
			self.graph.update(dt);
		}
		self.flow_time += dt as f64;

		if let Some(tween) = self.camera.as_mut() {
			let (transform, done) = tween.advance(dt as f64);
			self.transform = transform;
			if done {
				self.camera = None;
			}
		}

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::components::tree_canvas::layout::TreeLayout;
	use crate::tree::{JsonValue, build};

	fn state(value: serde_json::Value) -> TreeCanvasState {
		let config = CanvasConfig::default();
		let layout = TreeLayout {
			level_gap: config.level_gap,
			sibling_gap: config.sibling_gap,
		};
		TreeCanvasState::new(&build(&JsonValue::from(value)), &layout, config, 800.0, 600.0)
	}

	fn screen_pos(s: &TreeCanvasState, id: usize) -> (f64, f64) {
		let (x, y) = s.node_position(s.indices[id]).unwrap();
		(x * s.transform.k + s.transform.x, y * s.transform.k + s.transform.y)
	}

	fn settle(s: &mut TreeCanvasState) {
		for _ in 0..100 {
			s.tick(0.016);
		}
	}

	#[test]
	fn mirrors_graph_shape() {
		let s = state(json!({"a": [1, 2], "b": null}));
		assert_eq!(s.node_count(), 5);
		assert_eq!(s.edges.len(), 4);
		assert_eq!(s.path_of(s.indices[3]).as_deref(), Some("$.a[1]"));
	}

	#[test]
	fn initial_view_shows_every_node() {
		let s = state(json!({"a": [1, 2, 3, 4], "b": {"c": true}}));
		for id in 0..s.node_count() {
			let (x, y) = screen_pos(&s, id);
			assert!((0.0..=800.0).contains(&x), "node {id} x={x}");
			assert!((0.0..=600.0).contains(&y), "node {id} y={y}");
		}
	}

	#[test]
	fn click_on_node_yields_its_path() {
		let mut s = state(json!({"user": {"name": "Ada"}}));
		let (x, y) = screen_pos(&s, 2);
		s.pointer_down(x, y);
		s.pointer_move(x + 1.0, y);
		assert_eq!(s.pointer_up().as_deref(), Some("$.user.name"));
	}

	#[test]
	fn dragging_a_node_is_not_a_click() {
		let mut s = state(json!({"user": {"name": "Ada"}}));
		let (x, y) = screen_pos(&s, 1);
		s.pointer_down(x, y);
		s.pointer_move(x + 40.0, y + 40.0);
		assert_eq!(s.pointer_up(), None);
		let (nx, _) = screen_pos(&s, 1);
		assert!((nx - (x + 40.0)).abs() < 1.0);
	}

	#[test]
	fn background_drag_pans() {
		let mut s = state(json!([1]));
		let before = s.transform;
		s.pointer_down(1.0, 1.0);
		s.pointer_move(31.0, 11.0);
		assert_eq!(s.pointer_up(), None);
		assert_eq!(s.transform.x, before.x + 30.0);
		assert_eq!(s.transform.y, before.y + 10.0);
	}

	#[test]
	fn focus_centres_selected_node() {
		let mut s = state(json!({"a": [1, 2, 3, 4, 5, 6, 7, 8], "b": 0}));
		assert!(s.focus(NodeId(9)));
		assert_eq!(s.selected, Some(s.indices[9]));
		settle(&mut s);
		let (x, y) = screen_pos(&s, 9);
		assert!((x - 400.0).abs() < 1e-6);
		assert!((y - 300.0).abs() < 1e-6);
		assert!(!s.focus(NodeId(99)));
	}

	#[test]
	fn zoom_steps_stay_within_limits() {
		let mut s = state(json!({"a": 1}));
		for _ in 0..30 {
			s.zoom_in();
			settle(&mut s);
		}
		assert_eq!(s.transform.k, 2.0);
		for _ in 0..60 {
			s.zoom_out();
			settle(&mut s);
		}
		assert!((s.transform.k - 0.1).abs() < 1e-9);
	}

	#[test]
	fn physics_keeps_root_pinned() {
		let mut s = state(json!({"a": 1, "b": 2}));
		let root = s.node_position(s.indices[0]).unwrap();
		s.set_physics(true);
		settle(&mut s);
		assert_eq!(s.node_position(s.indices[0]).unwrap(), root);
	}
}
