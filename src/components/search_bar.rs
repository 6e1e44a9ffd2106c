use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::Event;

use crate::config::VisualizerConfig;

/// Remembers the last query that was acted on, so a repeat of it is skipped.
#[derive(Clone, Debug, Default)]
pub struct LastQuery(String);

impl LastQuery {
	/// Whether `query` should run. Blank queries always run and reset the
	/// memory.
	pub fn admit(&mut self, query: &str) -> bool {
		if query.trim().is_empty() {
			self.0.clear();
			return true;
		}
		if self.0 == query {
			return false;
		}
		self.0 = query.to_string();
		true
	}

	pub fn forget(&mut self) {
		self.0.clear();
	}
}

/// Path search field. Typing is debounced; the clear button fires an empty
/// query immediately. `query` holds the field text and may be reset by the
/// owner.
#[component]
pub fn SearchBar(
	query: RwSignal<String>,
	on_search: impl Fn(String) + 'static,
	#[prop(default = "Search by path (e.g., $.user.name or items[0])")] placeholder: &'static str,
) -> impl IntoView {
	let debounce = use_context::<VisualizerConfig>()
		.unwrap_or_default()
		.search_debounce;
	let on_search = Rc::new(on_search);
	let pending: Rc<Cell<Option<TimeoutHandle>>> = Rc::new(Cell::new(None));

	let (search_input, pending_input) = (on_search.clone(), pending.clone());
	let on_input = move |ev: Event| {
		let value = event_target_value(&ev);
		query.set(value.clone());
		if let Some(handle) = pending_input.take() {
			handle.clear();
		}
		let search = search_input.clone();
		// Skipped when the field was reset while waiting.
		let fire = move || {
			if query.with_untracked(|current| *current == value) {
				search(value);
			}
		};
		match set_timeout_with_handle(fire, debounce) {
			Ok(handle) => pending_input.set(Some(handle)),
			Err(err) => warn!("failed to schedule search: {err:?}"),
		}
	};

	let on_clear = move |_| {
		if let Some(handle) = pending.take() {
			handle.clear();
		}
		query.set(String::new());
		on_search(String::new());
	};

	view! {
		<div class="search-bar">
			<span class="search-icon" aria-hidden="true">"⌕"</span>
			<input
				type="text"
				class="search-input"
				placeholder=placeholder
				prop:value=query
				on:input=on_input
			/>
			<button
				class="search-clear"
				class:hidden=move || query.with(String::is_empty)
				aria-label="Clear search"
				on:click=on_clear
			>
				"×"
			</button>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeat_is_skipped_until_forgotten() {
		let mut last = LastQuery::default();
		assert!(last.admit("$.user"));
		assert!(!last.admit("$.user"));
		assert!(last.admit("$.orders"));
		assert!(last.admit("$.user"));

		last.forget();
		assert!(last.admit("$.user"));
	}

	#[test]
	fn blank_always_runs_and_resets() {
		let mut last = LastQuery::default();
		assert!(last.admit("name"));
		assert!(last.admit("  "));
		assert!(last.admit(""));
		assert!(last.admit("name"));
	}
}
