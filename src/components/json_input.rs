use std::rc::Rc;

use leptos::prelude::*;
use web_sys::KeyboardEvent;

const SAMPLE_JSON: &str = r#"{
  "user": {
    "id": 1,
    "name": "John Doe",
    "email": "john@example.com",
    "address": {
      "street": "123 Main St",
      "city": "New York",
      "zipCode": "10001"
    }
  },
  "orders": [
    {
      "id": 101,
      "product": "Laptop",
      "price": 999.99,
      "quantity": 1
    },
    {
      "id": 102,
      "product": "Mouse",
      "price": 29.99,
      "quantity": 2
    }
  ],
  "premium": true,
  "createdAt": "2025-10-28T00:00:00Z"
}"#;

/// Text area for the document plus Visualize / Clear actions.
/// Ctrl+Enter (Cmd+Enter on macOS) also visualizes.
#[component]
pub fn JsonInput(on_visualize: impl Fn(String) + 'static, on_clear: impl Fn() + 'static) -> impl IntoView {
	let (text, set_text) = signal(SAMPLE_JSON.to_string());
	let on_visualize = Rc::new(on_visualize);

	let visualize_click = on_visualize.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "Enter" {
			ev.prevent_default();
			on_visualize(text.get_untracked());
		}
	};

	view! {
		<div class="json-input">
			<div class="json-input-header">
				<h2>"JSON Input"</h2>
				<div class="json-input-actions">
					<button
						class="button button-outline"
						on:click=move |_| {
							set_text.set(String::new());
							on_clear();
						}
					>
						"Clear"
					</button>
					<button
						class="button button-primary"
						on:click=move |_| visualize_click(text.get_untracked())
					>
						"Visualize"
					</button>
				</div>
			</div>
			<textarea
				class="json-input-text"
				spellcheck="false"
				placeholder="Paste or type your JSON here..."
				prop:value=text
				on:input=move |ev| set_text.set(event_target_value(&ev))
				on:keydown=on_keydown
			/>
		</div>
	}
}
