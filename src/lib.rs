//! JSON tree visualizer: Leptos client-side app wiring and routes.
//!
//! The [`tree`] module holds the document-to-graph transformation and path
//! search; everything else renders and drives it in the browser.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
pub mod config;
pub mod error;
mod pages;
mod platform;
pub mod theme;
pub mod tree;

// Top-Level pages
use crate::components::toast::Toaster;
use crate::config::VisualizerConfig;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::theme::Theme;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the visualizer and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = VisualizerConfig::default();
	let theme = RwSignal::new(Theme::default());
	provide_context(Toaster::new(config.toast_ttl));
	provide_context(theme);
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme.get().as_str() />

		// sets the document title
		<Title text="JSON Tree Visualizer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
