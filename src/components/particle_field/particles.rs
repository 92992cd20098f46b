//! Glowing particles that orbit their anchors and swirl around the pointer.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::FieldConfig;
use super::theme::{Color, ParticlePalette};

/// A single particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Current x position.
	pub x: f64,
	/// Current y position.
	pub y: f64,
	/// Anchor the particle orbits around.
	pub base_x: f64,
	/// Anchor y.
	pub base_y: f64,
	/// Horizontal velocity, damped every tick.
	pub vx: f64,
	/// Vertical velocity.
	pub vy: f64,
	/// Core radius in pixels.
	pub size: f64,
	/// Palette color, alpha scaled by twinkle when drawn.
	pub color: Color,
	/// Orbit angle in radians.
	pub angle: f64,
	/// Orbit speed multiplier.
	pub speed: f64,
	/// Twinkle phase in radians.
	pub twinkle: f64,
}

/// Strength of pointer influence at `distance`, falling linearly from 1 at the
/// pointer to 0 at `radius` and beyond.
pub fn force_factor(distance: f64, radius: f64) -> f64 {
	if radius <= 0.0 || distance >= radius {
		0.0
	} else {
		1.0 - distance / radius
	}
}

/// Brightness for a twinkle phase, always within `[0, 1]`.
pub fn twinkle_intensity(phase: f64) -> f64 {
	phase.sin() * 0.5 + 0.5
}

impl Particle {
	/// Point on the idle orbit for the current angle.
	pub fn orbit_target(&self, config: &FieldConfig) -> (f64, f64) {
		(
			self.base_x + self.angle.cos() * config.orbit_radius,
			self.base_y + self.angle.sin() * config.orbit_radius,
		)
	}

	/// Advances the particle by one tick.
	pub fn step(&mut self, pointer: Option<(f64, f64)>, config: &FieldConfig) {
		self.angle += self.speed * config.orbit_rate;
		let (target_x, target_y) = self.orbit_target(config);

		if let Some((px, py)) = pointer {
			let (dx, dy) = (self.x - px, self.y - py);
			let force = force_factor((dx * dx + dy * dy).sqrt(), config.pointer_radius);
			if force > 0.0 {
				let theta = dy.atan2(dx);
				let tangential = force * config.tangential_force;
				let radial = force * config.radial_force;
				self.vx += (theta + FRAC_PI_2).cos() * tangential + theta.cos() * radial;
				self.vy += (theta + FRAC_PI_2).sin() * tangential + theta.sin() * radial;
			}
		}

		self.vx += (target_x - self.x) * config.spring;
		self.vy += (target_y - self.y) * config.spring;
		self.vx *= config.damping;
		self.vy *= config.damping;
		self.x += self.vx;
		self.y += self.vy;

		self.twinkle += config.twinkle_rate;
	}

	/// Current twinkle brightness.
	pub fn intensity(&self) -> f64 {
		twinkle_intensity(self.twinkle)
	}

	/// Length of the velocity vector.
	pub fn speed_magnitude(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}
}

/// Owns the particle set for one viewport size.
pub struct ParticleSystem {
	/// The live set, regenerated on resize.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	rng: SmallRng,
}

impl ParticleSystem {
	/// Generate `floor(width * height / density)` particles from `seed`.
	pub fn new(
		config: &FieldConfig,
		palette: &ParticlePalette,
		width: f64,
		height: f64,
		seed: u64,
	) -> Self {
		let mut system = Self {
			particles: Vec::new(),
			width,
			height,
			rng: SmallRng::seed_from_u64(seed),
		};
		system.populate(config, palette);
		system
	}

	fn populate(&mut self, config: &FieldConfig, palette: &ParticlePalette) {
		let count = config.particle_count(self.width, self.height);
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			let base_x = self.rng.gen_range(0.0..self.width);
			let base_y = self.rng.gen_range(0.0..self.height);
			let angle = self.rng.gen_range(0.0..TAU);
			let color = if palette.is_empty() {
				Color::rgb(255, 255, 255)
			} else {
				palette.get(self.rng.gen_range(0..palette.len()))
			};

			let mut p = Particle {
				x: base_x,
				y: base_y,
				base_x,
				base_y,
				vx: 0.0,
				vy: 0.0,
				size: self.rng.gen_range(config.size_min..config.size_max),
				color,
				angle,
				speed: self.rng.gen_range(config.speed_min..config.speed_max),
				twinkle: self.rng.gen_range(0.0..TAU),
			};
			(p.x, p.y) = p.orbit_target(config);
			particles.push(p);
		}

		self.particles = particles;
	}

	/// Advance every particle by one tick.
	pub fn update(&mut self, pointer: Option<(f64, f64)>, config: &FieldConfig) {
		for p in &mut self.particles {
			p.step(pointer, config);
		}
	}

	/// Discard the whole set and generate a fresh one for the new bounds.
	pub fn resize(
		&mut self,
		config: &FieldConfig,
		palette: &ParticlePalette,
		width: f64,
		height: f64,
	) {
		self.width = width;
		self.height = height;
		self.populate(config, palette);
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True for a zero-area viewport.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Viewport size the set was generated for.
	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn system(width: f64, height: f64) -> ParticleSystem {
		ParticleSystem::new(
			&FieldConfig::default(),
			&ParticlePalette::starlight(),
			width,
			height,
			7,
		)
	}

	fn resting_particle() -> Particle {
		Particle {
			x: 140.0,
			y: 100.0,
			base_x: 100.0,
			base_y: 100.0,
			vx: 4.0,
			vy: -3.0,
			size: 1.0,
			color: Color::rgb(255, 255, 255),
			angle: 0.0,
			speed: 0.0,
			twinkle: 0.0,
		}
	}

	#[test]
	fn generates_particles_inside_bounds() {
		let ps = system(800.0, 600.0);
		assert_eq!(ps.len(), 120);
		let config = FieldConfig::default();
		for p in &ps.particles {
			assert!((0.0..800.0).contains(&p.base_x));
			assert!((0.0..600.0).contains(&p.base_y));
			assert!(p.size >= config.size_min && p.size < config.size_max);
			assert!(ParticlePalette::starlight().colors.contains(&p.color));
			assert_eq!((p.vx, p.vy), (0.0, 0.0));
		}
	}

	#[test]
	fn particles_start_on_their_orbit() {
		let config = FieldConfig::default();
		let ps = system(400.0, 300.0);
		for p in &ps.particles {
			let (tx, ty) = p.orbit_target(&config);
			assert!((p.x - tx).abs() < 1e-9 && (p.y - ty).abs() < 1e-9);
		}
	}

	#[test]
	fn same_seed_same_field() {
		let a = system(640.0, 480.0);
		let b = system(640.0, 480.0);
		assert_eq!(a.len(), b.len());
		for (pa, pb) in a.particles.iter().zip(&b.particles) {
			assert_eq!((pa.base_x, pa.base_y, pa.size), (pb.base_x, pb.base_y, pb.size));
		}
	}

	#[test]
	fn resize_replaces_the_whole_set() {
		let config = FieldConfig::default();
		let palette = ParticlePalette::starlight();
		let mut ps = system(800.0, 600.0);
		let before: Vec<(f64, f64)> = ps.particles.iter().map(|p| (p.base_x, p.base_y)).collect();

		ps.resize(&config, &palette, 400.0, 300.0);
		assert_eq!(ps.len(), 30);
		assert_eq!(ps.bounds(), (400.0, 300.0));
		for p in &ps.particles {
			assert!((0.0..400.0).contains(&p.base_x));
			assert!((0.0..300.0).contains(&p.base_y));
			assert!(!before.contains(&(p.base_x, p.base_y)));
		}
	}

	#[test]
	fn empty_viewport_has_no_particles() {
		let mut ps = system(0.0, 0.0);
		assert!(ps.is_empty());
		ps.update(Some((0.0, 0.0)), &FieldConfig::default());
		assert!(ps.is_empty());
	}

	#[test]
	fn force_factor_boundaries() {
		assert_eq!(force_factor(250.0, 250.0), 0.0);
		assert_eq!(force_factor(300.0, 250.0), 0.0);
		assert_eq!(force_factor(0.0, 250.0), 1.0);
		assert!((force_factor(125.0, 250.0) - 0.5).abs() < 1e-12);
	}

	#[test]
	fn twinkle_stays_in_unit_range() {
		let config = FieldConfig::default();
		let mut p = resting_particle();
		p.twinkle = 1.3;
		for _ in 0..10_000 {
			p.step(None, &config);
			let i = p.intensity();
			assert!((0.0..=1.0).contains(&i), "intensity {} out of range", i);
		}
	}

	#[test]
	fn damping_without_forces_is_contractive() {
		let config = FieldConfig {
			spring: 0.0,
			..FieldConfig::default()
		};
		let mut p = resting_particle();
		let mut previous = p.speed_magnitude();
		for _ in 0..50 {
			p.step(None, &config);
			let current = p.speed_magnitude();
			assert!(current < previous);
			assert!((current - previous * 0.92).abs() < 1e-9);
			previous = current;
		}
	}

	#[test]
	fn damping_on_target_with_default_spring() {
		// Particle sits exactly on its orbit target and does not orbit,
		// so the spring contributes nothing on the first tick.
		let config = FieldConfig::default();
		let mut p = resting_particle();
		let before = p.speed_magnitude();
		p.step(None, &config);
		assert!((p.speed_magnitude() - before * 0.92).abs() < 1e-9);
	}

	#[test]
	fn pointer_outside_radius_has_no_effect() {
		let config = FieldConfig::default();
		let mut with_pointer = resting_particle();
		let mut without = resting_particle();
		with_pointer.step(Some((140.0 + 250.0, 100.0)), &config);
		without.step(None, &config);
		assert_eq!((with_pointer.vx, with_pointer.vy), (without.vx, without.vy));
	}

	#[test]
	fn pointer_deflects_around_and_away() {
		let config = FieldConfig::default();
		let mut p = resting_particle();
		(p.vx, p.vy) = (0.0, 0.0);
		// Pointer directly left of the particle, 125 units away
		p.step(Some((15.0, 100.0)), &config);
		// radial push along +x: 0.5 * 1.5, tangential along +y: 0.5 * 3
		assert!((p.vx - 0.5 * 1.5 * 0.92).abs() < 1e-9);
		assert!((p.vy - 0.5 * 3.0 * 0.92).abs() < 1e-9);
	}
}
