//! Leptos component wrapping the particle field canvas.
//!
//! The component renders a fixed, full-viewport canvas behind the page content
//! and starts the field once the canvas is mounted. When the owning scope is
//! disposed the render loop is stopped and its listeners are removed.

use leptos::prelude::*;
use log::warn;

use super::field::{self, FieldHandle};

/// Full-viewport animated background.
///
/// Pointer input is read from the window, so the canvas itself ignores
/// pointer events and never blocks the content layered above it.
#[component]
pub fn ParticleFieldCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handle: StoredValue<Option<FieldHandle>> = StoredValue::new(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if handle.with_value(|h| h.is_some()) {
			return;
		}

		match field::initialize(canvas.into()) {
			Ok(h) => handle.set_value(Some(h)),
			Err(e) => warn!("particle-swirl: failed to start field: {:?}", e),
		}
	});

	on_cleanup(move || {
		if let Some(Some(h)) = handle.try_get_value() {
			h.stop();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}
