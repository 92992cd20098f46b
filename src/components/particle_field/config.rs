//! Tunable constants for the particle field simulation.
//!
//! Every number that shapes the motion of the field lives here so the feel of
//! the effect can be adjusted in one place. Values are expressed per animation
//! tick (one `requestAnimationFrame` callback) and in CSS pixels.
//!
//! # Forces
//!
//! Each tick a particle is pulled towards a point orbiting its anchor by a
//! spring, pushed around the pointer by a tangential and a radial force, and
//! slowed by a uniform drag:
//!
//! ```text
//! v += (target - p) * spring
//! v *= damping
//! p += v
//! ```

/// Numeric configuration for particle generation, physics and swirl timing.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Viewport area (px²) per particle. Count is `floor(w * h / density_divisor)`.
	pub density_divisor: f64,
	/// Smallest particle radius.
	pub size_min: f64,
	/// Upper bound (exclusive) of particle radius.
	pub size_max: f64,
	/// Smallest per-particle orbit speed multiplier.
	pub speed_min: f64,
	/// Upper bound (exclusive) of the orbit speed multiplier.
	pub speed_max: f64,
	/// Radius of the idle orbit around the anchor.
	pub orbit_radius: f64,
	/// Orbit angle advanced per tick, multiplied by the particle's speed.
	pub orbit_rate: f64,
	/// Distance within which the pointer deflects particles.
	pub pointer_radius: f64,
	/// Strength of the push perpendicular to the pointer direction.
	pub tangential_force: f64,
	/// Strength of the push away from the pointer.
	pub radial_force: f64,
	/// Fraction of the distance to the orbit target added to velocity per tick.
	pub spring: f64,
	/// Velocity multiplier applied every tick.
	pub damping: f64,
	/// Twinkle phase advanced per tick.
	pub twinkle_rate: f64,
	/// Distance from the viewport center within which pointer swirls appear.
	pub swirl_pointer_radius: f64,
	/// Scale from the frame timestamp (ms) to swirl rotation time.
	pub time_scale: f64,
	/// Angular step used when sampling swirl arms.
	pub swirl_step: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			density_divisor: 4000.0,
			size_min: 0.5,
			size_max: 3.0,
			speed_min: 0.5,
			speed_max: 1.5,
			orbit_radius: 40.0,
			orbit_rate: 0.015,
			pointer_radius: 250.0,
			tangential_force: 3.0,
			radial_force: 1.5,
			spring: 0.03,
			damping: 0.92,
			twinkle_rate: 0.05,
			swirl_pointer_radius: 600.0,
			time_scale: 0.0003,
			swirl_step: 0.05,
		}
	}
}

impl FieldConfig {
	/// Number of particles for a viewport of the given size.
	///
	/// Non-positive dimensions yield an empty field.
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		let area = width.max(0.0) * height.max(0.0);
		(area / self.density_divisor).floor() as usize
	}

	/// Converts a frame timestamp in milliseconds to swirl time.
	pub fn swirl_time(&self, timestamp_ms: f64) -> f64 {
		timestamp_ms * self.time_scale
	}
}
