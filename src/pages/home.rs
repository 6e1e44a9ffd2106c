use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};

use crate::components::info_panel::InfoPanel;
use crate::components::json_input::JsonInput;
use crate::components::search_bar::{LastQuery, SearchBar};
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast::{ToastKind, ToastStack, Toaster};
use crate::components::toolbar::Toolbar;
use crate::components::tree_canvas::{CanvasHandle, TreeCanvas};
use crate::config::VisualizerConfig;
use crate::platform::{copy_to_clipboard, export_canvas_png};
use crate::theme::Theme;
use crate::tree::{JsonGraph, SearchOutcome, TreeStats, build, parse_document, resolve};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<VisualizerConfig>().unwrap_or_default();
	let toaster = expect_context::<Toaster>();
	let theme = expect_context::<RwSignal<Theme>>();
	let graph = RwSignal::new(JsonGraph::default());
	let stats = Signal::derive(move || graph.with(TreeStats::of));
	let handle = CanvasHandle::new();
	let query = RwSignal::new(String::new());
	let last_query = Rc::new(RefCell::new(LastQuery::default()));

	// A new or cleared graph starts with an empty search.
	let reset_search = {
		let last_query = last_query.clone();
		move || {
			last_query.borrow_mut().forget();
			query.set(String::new());
		}
	};

	let visualize_reset = reset_search.clone();
	let on_visualize = move |text: String| match parse_document(&text) {
		Ok(value) => {
			visualize_reset();
			let built = build(&value);
			info!("visualizing {} nodes", built.nodes.len());
			graph.set(built);
			toaster.show("JSON visualized successfully!", ToastKind::Success);
		}
		Err(err) => {
			warn!("rejected input: {err}");
			visualize_reset();
			graph.set(JsonGraph::default());
			toaster.show(err.to_string(), ToastKind::Error);
		}
	};
	let on_clear = move || {
		reset_search();
		graph.set(JsonGraph::default());
	};

	let on_activate = move |path: String| {
		spawn_local(async move {
			match copy_to_clipboard(&path).await {
				Ok(()) => toaster.show(format!("Copied: {path}"), ToastKind::Success),
				Err(err) => {
					warn!("copy failed: {err}");
					toaster.show(format!("Path: {path}"), ToastKind::Info);
				}
			}
		});
	};

	let search_handle = handle.clone();
	let on_search = move |query: String| {
		if !last_query.borrow_mut().admit(&query) {
			return;
		}
		graph.with_untracked(|g| match resolve(&g.nodes, &query) {
			SearchOutcome::Cleared => search_handle.clear_selection(),
			SearchOutcome::Found(node) => {
				info!("search {query:?} matched {}", node.path);
				search_handle.focus(node.id);
				toaster.show(format!("Match found: {}", node.path), ToastKind::Success);
			}
			SearchOutcome::NotFound => {
				search_handle.clear_selection();
				toaster.show("No match found", ToastKind::Error);
			}
		});
	};

	let export_handle = handle.clone();
	let filename = config.export_filename.clone();
	let on_download = move || {
		let result = match export_handle.canvas_element() {
			Some(canvas) => export_canvas_png(&canvas, &filename),
			None => return,
		};
		if let Err(err) = result {
			error!("{err}");
			toaster.show(err.to_string(), ToastKind::Error);
		}
	};

	view! {
		<div class="app-shell">
			<header class="app-header">
				<div class="brand">
					<span class="brand-logo">"🌳"</span>
					<div>
						<h1>"JSON Tree Visualizer"</h1>
						<p class="subtitle">"Interactive visualization tool"</p>
					</div>
				</div>
				<ThemeToggle theme=theme />
			</header>

			<main class="app-main">
				<aside class="input-pane">
					<JsonInput on_visualize=on_visualize on_clear=on_clear />
				</aside>

				<section class="canvas-pane">
					<TreeCanvas
						graph=graph
						theme=theme
						handle=handle.clone()
						on_activate=on_activate
					/>
					<Show when=move || graph.with(JsonGraph::is_empty)>
						<div class="placeholder">
							<h2>"Ready to Visualize"</h2>
							<p>"Enter your JSON and click \"Visualize\" to see the tree"</p>
						</div>
					</Show>
					<div class="overlay overlay-left">
						<SearchBar query=query on_search=on_search />
					</div>
					<div class="overlay overlay-right">
						<Toolbar handle=handle on_download=on_download />
						<InfoPanel stats=stats />
					</div>
				</section>
			</main>

			<ToastStack />
		</div>
	}
}
