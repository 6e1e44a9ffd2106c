use leptos::prelude::*;

use crate::theme::Theme;

#[component]
pub fn ThemeToggle(theme: RwSignal<Theme>) -> impl IntoView {
	view! {
		<button
			class="tool theme-toggle"
			title="Toggle theme"
			aria-label="Toggle theme"
			on:click=move |_| theme.update(|t| *t = t.toggled())
		>
			{move || match theme.get() {
				Theme::Light => "☾",
				Theme::Dark => "☀",
			}}
		</button>
	}
}
