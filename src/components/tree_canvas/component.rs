use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent};

use super::handle::CanvasHandle;
use super::layout::TreeLayout;
use super::render;
use super::state::TreeCanvasState;
use crate::config::VisualizerConfig;
use crate::theme::Theme;
use crate::tree::JsonGraph;

/// Sizes the canvas to its parent and returns the new size.
fn fit_to_parent(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

fn local_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

/// Renders a [`JsonGraph`] as a pannable, zoomable tree. A click on a node
/// reports its path through `on_activate`.
#[component]
pub fn TreeCanvas(
	#[prop(into)] graph: Signal<JsonGraph>,
	#[prop(into)] theme: Signal<Theme>,
	handle: CanvasHandle,
	on_activate: impl Fn(String) + 'static,
) -> impl IntoView {
	let config = use_context::<VisualizerConfig>().unwrap_or_default().canvas;
	let canvas_ref = handle.canvas;
	let state = handle.state.clone();
	let on_activate = Rc::new(on_activate);
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	// Render loop and resize listener, set up once the canvas is mounted.
	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animate_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window; tree canvas disabled");
			return;
		};
		fit_to_parent(&canvas);

		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>(),
			_ => {
				error!("2d canvas context unavailable");
				return;
			}
		};
		let Ok(ctx) = ctx else {
			error!("2d canvas context has an unexpected type");
			return;
		};

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = fit_to_parent(&canvas_resize);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Each new graph replaces the surface state wholesale.
	let handle_graph = handle.clone();
	Effect::new(move |_| {
		let data = graph.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (w, h) = fit_to_parent(&canvas.into());
		let layout = TreeLayout {
			level_gap: config.level_gap,
			sibling_gap: config.sibling_gap,
		};
		let mut next = TreeCanvasState::new(&data, &layout, config.clone(), w, h);
		next.theme = theme.get_untracked();
		debug!("tree canvas rebuilt with {} nodes", next.node_count());
		handle_graph.install(next);
	});

	let state_theme = state.clone();
	Effect::new(move |_| {
		let theme = theme.get();
		if let Some(ref mut s) = *state_theme.borrow_mut() {
			s.theme = theme;
		}
	});

	let point = move |client_x: i32, client_y: i32| {
		canvas_ref
			.get_untracked()
			.map(|c| local_point(&c.into(), client_x, client_y))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = point(ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = point(ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	// The state borrow ends before the callback runs.
	let (state_mu, activate_mu) = (state.clone(), on_activate.clone());
	let on_mouseup = move |_: MouseEvent| {
		let clicked = state_mu.borrow_mut().as_mut().and_then(|s| s.pointer_up());
		if let Some(path) = clicked {
			activate_mu(path);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = point(ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.wheel(x, y, ev.delta_y());
		}
	};

	let state_ts = state.clone();
	let on_touchstart = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		ev.prevent_default();
		let Some((x, y)) = point(touch.client_x(), touch.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_ts.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_tm = state.clone();
	let on_touchmove = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		ev.prevent_default();
		let Some((x, y)) = point(touch.client_x(), touch.client_y()) else {
			return;
		};
		if let Some(ref mut s) = *state_tm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let (state_te, activate_te) = (state.clone(), on_activate.clone());
	let on_touchend = move |_: TouchEvent| {
		let tapped = state_te.borrow_mut().as_mut().and_then(|s| s.pointer_up());
		if let Some(path) = tapped {
			activate_te(path);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="tree-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			on:touchstart=on_touchstart
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style="display: block; cursor: grab; touch-action: none;"
		/>
	}
}
