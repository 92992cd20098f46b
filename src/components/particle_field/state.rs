//! Field state owned by one particle field instance.
//!
//! Holds the viewport size, the latest pointer position and the particle set.
//! Input handlers only write into this state; the animation loop reads it once
//! per tick, so a pointer move is observed on the following frame.

use super::config::FieldConfig;
use super::particles::ParticleSystem;
use super::swirl::{self, Swirl};
use super::theme::Theme;

/// Viewport, pointer and particles for a single canvas.
pub struct FieldState {
	/// Viewport width in CSS pixels.
	pub width: f64,
	/// Viewport height in CSS pixels.
	pub height: f64,
	/// The particle set for the current viewport.
	pub particles: ParticleSystem,
	/// Tuning constants.
	pub config: FieldConfig,
	pointer: Option<(f64, f64)>,
}

impl FieldState {
	/// Fresh state for a viewport, with no pointer yet.
	pub fn new(width: f64, height: f64, config: FieldConfig, theme: &Theme, seed: u64) -> Self {
		let particles = ParticleSystem::new(&config, &theme.palette, width, height, seed);
		Self {
			width,
			height,
			particles,
			config,
			pointer: None,
		}
	}

	/// Record the latest pointer position in viewport coordinates.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	/// Forget the pointer until the next move.
	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Last recorded pointer, if any.
	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	/// Adopt new viewport bounds and regenerate every particle.
	pub fn resize(&mut self, width: f64, height: f64, theme: &Theme) {
		self.width = width;
		self.height = height;
		self.particles
			.resize(&self.config, &theme.palette, width, height);
	}

	/// Advance particle physics by one tick.
	pub fn tick(&mut self) {
		self.particles.update(self.pointer, &self.config);
	}

	/// Swirls to draw at the given frame timestamp: the ambient set, then the
	/// pointer pair when the pointer is close enough to the viewport center.
	pub fn swirls(&self, timestamp_ms: f64) -> Vec<Swirl> {
		let time = self.config.swirl_time(timestamp_ms);
		let mut swirls = swirl::ambient_swirls(self.width, self.height, time);
		if let Some(pointer) = self.pointer {
			swirls.extend(swirl::pointer_swirls(
				pointer,
				self.width,
				self.height,
				time,
				self.config.swirl_pointer_radius,
			));
		}
		swirls
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state(width: f64, height: f64) -> FieldState {
		FieldState::new(width, height, FieldConfig::default(), &Theme::default(), 42)
	}

	#[test]
	fn pointer_is_absent_until_moved() {
		let mut s = state(800.0, 600.0);
		assert_eq!(s.pointer(), None);
		assert_eq!(s.swirls(1000.0).len(), 6);

		s.set_pointer(400.0, 300.0);
		assert_eq!(s.pointer(), Some((400.0, 300.0)));
		assert_eq!(s.swirls(1000.0).len(), 8);

		s.clear_pointer();
		assert_eq!(s.swirls(1000.0).len(), 6);
	}

	#[test]
	fn far_pointer_adds_no_swirls() {
		let mut s = state(800.0, 600.0);
		s.set_pointer(1200.0, 300.0);
		assert_eq!(s.swirls(0.0).len(), 6);
	}

	#[test]
	fn pointer_move_takes_effect_on_tick() {
		let mut s = state(800.0, 600.0);
		let mut calm = state(800.0, 600.0);
		let p = s.particles.particles[0].clone();
		s.set_pointer(p.x + 10.0, p.y);
		// recording the pointer alone does not move anything
		assert_eq!(s.particles.particles[0].x, p.x);
		assert_eq!(s.particles.particles[0].vx, 0.0);

		let far: Vec<bool> = s
			.particles
			.particles
			.iter()
			.map(|q| ((q.x - p.x - 10.0).powi(2) + (q.y - p.y).powi(2)).sqrt() >= s.config.pointer_radius)
			.collect();
		s.tick();
		calm.tick();

		let (stirred, idle) = (&s.particles.particles[0], &calm.particles.particles[0]);
		// pointer sits to the right, so the radial push is towards -x
		assert!(stirred.vx < idle.vx, "vx {} vs {}", stirred.vx, idle.vx);
		assert_ne!(stirred.vy, idle.vy);
		for ((a, b), far) in s.particles.particles.iter().zip(&calm.particles.particles).zip(far) {
			if far {
				assert_eq!((a.vx, a.vy), (b.vx, b.vy));
			}
		}
	}

	#[test]
	fn cleared_pointer_stops_deflection() {
		let mut with_pointer = state(800.0, 600.0);
		let mut without = state(800.0, 600.0);
		let p = with_pointer.particles.particles[0].clone();
		with_pointer.set_pointer(p.x + 5.0, p.y + 5.0);
		with_pointer.clear_pointer();
		with_pointer.tick();
		without.tick();
		assert_eq!(
			with_pointer.particles.particles[0].vx,
			without.particles.particles[0].vx
		);
	}

	#[test]
	fn resize_updates_bounds_and_count() {
		let mut s = state(800.0, 600.0);
		assert_eq!(s.particles.len(), 120);
		s.resize(1024.0, 768.0, &Theme::default());
		assert_eq!((s.width, s.height), (1024.0, 768.0));
		assert_eq!(s.particles.len(), 196);
	}
}
