//! particle-swirl: pointer-reactive particle and swirl page background.
//!
//! This crate provides a WASM-based canvas component that fills the viewport
//! with orbiting, twinkling particles and slowly rotating spirals that react
//! to the pointer.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::particle_field::{
	FieldConfig, FieldHandle, FieldState, ParticleField, ParticleFieldCanvas, Theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-swirl: logging initialized");
}

/// Main application component.
/// Places the animated background behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Swirl" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas />
		<div class="page-overlay">
			<h1>"Particle Swirl"</h1>
			<p class="subtitle">"Move the pointer to stir the field."</p>
		</div>
	}
}
