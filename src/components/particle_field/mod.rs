//! Pointer-reactive particle and swirl background.
//!
//! Renders an animated field on an HTML canvas with:
//! - Glowing particles orbiting fixed anchors, deflected around the pointer
//! - Slowly rotating multi-arm swirls, plus a pair that follows the pointer
//! - A radial vignette over an opaque base fill
//!
//! The particle count tracks the viewport area and the whole set is regenerated
//! whenever the window is resized.
//!
//! # Example
//!
//! ```ignore
//! use particle_swirl::ParticleFieldCanvas;
//!
//! view! {
//!     <ParticleFieldCanvas />
//!     <main>"Page content"</main>
//! }
//! ```

mod component;
pub mod config;
mod field;
mod lifecycle;
pub mod particles;
mod render;
pub mod state;
pub mod swirl;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use config::FieldConfig;
pub use field::{FieldHandle, ParticleField, initialize};
pub use state::FieldState;
pub use theme::Theme;
