use std::time::Duration;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	Success,
	Error,
	Info,
}

impl ToastKind {
	fn as_str(self) -> &'static str {
		match self {
			ToastKind::Success => "success",
			ToastKind::Error => "error",
			ToastKind::Info => "info",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	pub id: u64,
	pub message: String,
	pub kind: ToastKind,
}

/// Transient notifications. Each toast removes itself after `ttl`.
#[derive(Clone, Copy)]
pub struct Toaster {
	toasts: RwSignal<Vec<Toast>>,
	next_id: RwSignal<u64>,
	ttl: Duration,
}

impl Toaster {
	pub fn new(ttl: Duration) -> Self {
		Self {
			toasts: RwSignal::new(Vec::new()),
			next_id: RwSignal::new(0),
			ttl,
		}
	}

	pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
		let id = self.next_id.get_untracked();
		self.next_id.set(id + 1);
		self.toasts.update(|list| {
			list.push(Toast {
				id,
				message: message.into(),
				kind,
			})
		});
		let this = *self;
		set_timeout(move || this.dismiss(id), self.ttl);
	}

	pub fn dismiss(&self, id: u64) {
		self.toasts.update(|list| list.retain(|t| t.id != id));
	}
}

#[component]
pub fn ToastStack() -> impl IntoView {
	let toaster = expect_context::<Toaster>();

	view! {
		<div class="toast-stack" aria-live="polite">
			<For
				each=move || toaster.toasts.get()
				key=|toast| toast.id
				children=move |toast: Toast| {
					let id = toast.id;
					view! {
						<div class=format!("toast toast-{}", toast.kind.as_str()) role="status">
							<span class="toast-message">{toast.message}</span>
							<button
								class="toast-close"
								aria-label="Dismiss"
								on:click=move |_| toaster.dismiss(id)
							>
								"×"
							</button>
						</div>
					}
				}
			/>
		</div>
	}
}
