//! Decorative multi-arm spirals.
//!
//! Swirls carry no state between frames: the ambient set is derived from the
//! viewport size and the current time, and the pointer pair from the pointer
//! position. Arms are sampled as polylines so the renderer only strokes paths.

use std::f64::consts::{PI, TAU};

use super::particles::force_factor;

/// Number of arms per swirl.
pub const ARM_COUNT: usize = 5;

/// Angle swept by each arm.
pub const ARM_SWEEP: f64 = 3.0 * PI;

/// Gradient family a swirl is stroked with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwirlColor {
	/// Warm amber
	Gold,
	/// Cool blue-violet
	Sky,
}

/// One swirl to draw this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Swirl {
	/// Center x in viewport pixels
	pub cx: f64,
	/// Center y in viewport pixels
	pub cy: f64,
	/// Outer radius; arms start here and wind inwards
	pub radius: f64,
	/// Rotation in radians applied to every arm
	pub rotation: f64,
	/// Opacity multiplier for the gradient stops
	pub alpha: f64,
	/// Gradient family
	pub color: SwirlColor,
}

/// Fixed placement of an ambient swirl.
#[derive(Clone, Copy, Debug)]
pub struct AmbientSwirl {
	/// Horizontal position as a fraction of viewport width
	pub fx: f64,
	/// Vertical position as a fraction of viewport height
	pub fy: f64,
	/// Outer radius in pixels
	pub radius: f64,
	/// Signed rotation rate in radians per unit of swirl time
	pub rate: f64,
	/// Opacity multiplier
	pub alpha: f64,
	/// Gradient family
	pub color: SwirlColor,
}

/// Background swirls, alternating gold and sky.
#[rustfmt::skip]
pub const AMBIENT_SWIRLS: [AmbientSwirl; 6] = [
	AmbientSwirl { fx: 0.15, fy: 0.20, radius: 200.0, rate: 1.0, alpha: 0.50, color: SwirlColor::Gold },
	AmbientSwirl { fx: 0.85, fy: 0.25, radius: 250.0, rate: -0.8, alpha: 0.40, color: SwirlColor::Sky },
	AmbientSwirl { fx: 0.50, fy: 0.80, radius: 300.0, rate: 0.6, alpha: 0.35, color: SwirlColor::Gold },
	AmbientSwirl { fx: 0.25, fy: 0.70, radius: 180.0, rate: -1.2, alpha: 0.45, color: SwirlColor::Sky },
	AmbientSwirl { fx: 0.75, fy: 0.65, radius: 220.0, rate: 0.9, alpha: 0.40, color: SwirlColor::Gold },
	AmbientSwirl { fx: 0.50, fy: 0.15, radius: 160.0, rate: -0.7, alpha: 0.30, color: SwirlColor::Sky },
];

/// Ambient swirls for a viewport at the given swirl time.
pub fn ambient_swirls(width: f64, height: f64, time: f64) -> Vec<Swirl> {
	AMBIENT_SWIRLS
		.iter()
		.map(|s| Swirl {
			cx: width * s.fx,
			cy: height * s.fy,
			radius: s.radius,
			rotation: time * s.rate,
			alpha: s.alpha,
			color: s.color,
		})
		.collect()
}

/// Swirl alpha multiplier for a pointer at `distance` from the viewport center.
pub fn pointer_swirl_factor(distance: f64, radius: f64) -> f64 {
	force_factor(distance, radius)
}

/// The gold and sky pair that follows the pointer, fading out with distance
/// from the viewport center. Empty once the pointer is `radius` or further away.
pub fn pointer_swirls(
	pointer: (f64, f64),
	width: f64,
	height: f64,
	time: f64,
	radius: f64,
) -> Vec<Swirl> {
	let (px, py) = pointer;
	let (dx, dy) = (px - width / 2.0, py - height / 2.0);
	let factor = pointer_swirl_factor((dx * dx + dy * dy).sqrt(), radius);
	if factor <= 0.0 {
		return Vec::new();
	}

	vec![
		Swirl {
			cx: px,
			cy: py,
			radius: 150.0,
			rotation: time * 2.0,
			alpha: 0.6 * factor,
			color: SwirlColor::Gold,
		},
		Swirl {
			cx: px,
			cy: py,
			radius: 100.0,
			rotation: -time * 2.5,
			alpha: 0.5 * factor,
			color: SwirlColor::Sky,
		},
	]
}

/// Distance from the center at `angle` along an arm.
pub fn arm_radius(radius: f64, angle: f64) -> f64 {
	radius * (1.0 - angle / ARM_SWEEP) * 0.8
}

impl Swirl {
	/// Angular offset of the given arm, including the swirl's rotation.
	pub fn arm_offset(&self, arm: usize) -> f64 {
		self.rotation + arm as f64 * TAU / ARM_COUNT as f64
	}

	/// Absolute points along one arm, from the outer tip inwards.
	pub fn arm_points(&self, arm: usize, step: f64) -> Vec<(f64, f64)> {
		let offset = self.arm_offset(arm);
		let step = if step > 0.0 { step } else { 0.05 };
		let samples = (ARM_SWEEP / step).ceil() as usize;

		(0..samples)
			.map(|i| {
				let angle = i as f64 * step;
				let r = arm_radius(self.radius, angle);
				let phi = 1.5 * angle + offset;
				(self.cx + phi.cos() * r, self.cy + phi.sin() * r)
			})
			.collect()
	}
}
