use leptos::prelude::*;

use super::tree_canvas::CanvasHandle;

/// Camera controls, physics toggle and image export.
#[component]
pub fn Toolbar(handle: CanvasHandle, on_download: impl Fn() + 'static) -> impl IntoView {
	let physics = handle.physics();
	let (zoom_in, zoom_out, fit, toggle) = (handle.clone(), handle.clone(), handle.clone(), handle);

	view! {
		<div class="toolbar">
			<button class="tool" title="Zoom in" on:click=move |_| zoom_in.zoom_in()>
				"+"
			</button>
			<button class="tool" title="Zoom out" on:click=move |_| zoom_out.zoom_out()>
				"−"
			</button>
			<button class="tool" title="Fit view" on:click=move |_| fit.fit_view()>
				"⤢"
			</button>
			<button
				class="tool"
				class:active=move || physics.get()
				title="Toggle physics"
				on:click=move |_| toggle.toggle_physics()
			>
				"≋"
			</button>
			<button class="tool" title="Download as PNG" on:click=move |_| on_download()>
				"⭳"
			</button>
		</div>
	}
}
