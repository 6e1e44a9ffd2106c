use leptos::prelude::*;

use crate::tree::TreeStats;

#[component]
pub fn InfoPanel(#[prop(into)] stats: Signal<TreeStats>) -> impl IntoView {
	let (open, set_open) = signal(false);

	view! {
		<div class="info-panel">
			<button
				class="tool"
				title="View Statistics"
				aria-label="Toggle info panel"
				on:click=move |_| set_open.update(|o| *o = !*o)
			>
				"i"
			</button>
			<Show when=move || open.get()>
				<div class="info-popover">
					<h3>"Tree Statistics"</h3>
					<dl>
						<dt>"Nodes"</dt>
						<dd>{move || stats.get().nodes}</dd>
						<dt>"Connections"</dt>
						<dd>{move || stats.get().edges}</dd>
						<dt>"Depth"</dt>
						<dd>{move || stats.get().depth}</dd>
					</dl>
					<p class="tip">"Tip: click any node to copy its JSON path"</p>
				</div>
			</Show>
		</div>
	}
}
