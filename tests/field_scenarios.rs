//! End-to-end behaviour of the field state across resizes and pointer input.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use particle_swirl::components::particle_field::particles::force_factor;
use particle_swirl::{FieldConfig, FieldState, Theme};

fn field(width: f64, height: f64, seed: u64) -> FieldState {
	FieldState::new(width, height, FieldConfig::default(), &Theme::default(), seed)
}

#[test]
fn resize_regenerates_for_new_area() {
	let theme = Theme::default();
	let mut state = field(800.0, 600.0, 1);
	assert_eq!(state.particles.len(), 120);
	let old_anchors: Vec<(f64, f64)> = state
		.particles
		.particles
		.iter()
		.map(|p| (p.base_x, p.base_y))
		.collect();

	state.resize(400.0, 300.0, &theme);
	assert_eq!(state.particles.len(), 30);
	for p in &state.particles.particles {
		assert!(p.base_x >= 0.0 && p.base_x < 400.0);
		assert!(p.base_y >= 0.0 && p.base_y < 300.0);
		assert!(!old_anchors.contains(&(p.base_x, p.base_y)));
	}

	state.resize(800.0, 600.0, &theme);
	assert_eq!(state.particles.len(), 120);
}

#[test]
fn particles_settle_near_their_orbit_without_pointer() {
	let config = FieldConfig::default();
	let mut state = field(800.0, 600.0, 3);
	for _ in 0..600 {
		state.tick();
	}
	// The orbit target moves, so particles trail it but stay close.
	for p in &state.particles.particles {
		let (tx, ty) = p.orbit_target(&config);
		let lag = ((p.x - tx).powi(2) + (p.y - ty).powi(2)).sqrt();
		assert!(lag < config.orbit_radius * 2.0, "particle lags {} behind", lag);
	}
}

#[test]
fn pointer_stirs_only_nearby_particles() {
	let config = FieldConfig::default();
	let mut stirred = field(1200.0, 800.0, 9);
	let mut calm = field(1200.0, 800.0, 9);
	stirred.set_pointer(600.0, 400.0);

	let near: Vec<bool> = stirred
		.particles
		.particles
		.iter()
		.map(|p| {
			let d = ((p.x - 600.0).powi(2) + (p.y - 400.0).powi(2)).sqrt();
			force_factor(d, config.pointer_radius) > 0.0
		})
		.collect();

	stirred.tick();
	calm.tick();

	for ((a, b), near) in stirred
		.particles
		.particles
		.iter()
		.zip(&calm.particles.particles)
		.zip(near)
	{
		if near {
			assert_ne!((a.vx, a.vy), (b.vx, b.vy));
		} else {
			assert_eq!((a.vx, a.vy), (b.vx, b.vy));
		}
	}
}

#[test]
fn twinkle_stays_bounded_over_many_frames() {
	let mut state = field(640.0, 480.0, 11);
	state.set_pointer(320.0, 240.0);
	for frame in 0..2_000 {
		state.tick();
		if frame % 100 == 0 {
			for p in &state.particles.particles {
				assert!((0.0..=1.0).contains(&p.intensity()));
			}
		}
	}
}

#[test]
fn frame_swirls_follow_pointer_distance() {
	let mut state = field(800.0, 600.0, 5);
	assert_eq!(state.swirls(5_000.0).len(), 6);

	state.set_pointer(400.0, 300.0);
	let swirls = state.swirls(5_000.0);
	assert_eq!(swirls.len(), 8);
	assert_eq!((swirls[6].cx, swirls[6].cy), (400.0, 300.0));

	state.set_pointer(400.0, 300.0 + 600.0);
	assert_eq!(state.swirls(5_000.0).len(), 6);
}
