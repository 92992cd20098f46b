//! Canvas rendering for the particle field.
//!
//! Draws in three passes, back to front:
//! 1. Opaque base fill and the radial vignette wash
//! 2. Ambient swirls, then the pointer swirls
//! 3. Particle glows with their twinkling cores

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::particles::Particle;
use super::state::FieldState;
use super::swirl::{ARM_COUNT, Swirl, SwirlColor};
use super::theme::{SwirlGradient, Theme};

/// Renders one frame of the field to the canvas.
pub fn render(
	state: &FieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	timestamp_ms: f64,
) -> Result<(), JsValue> {
	draw_background(state, ctx, theme)?;

	for swirl in state.swirls(timestamp_ms) {
		draw_swirl(ctx, theme, &swirl, state.config.swirl_step)?;
	}

	for p in &state.particles.particles {
		draw_particle(ctx, theme, p)?;
	}

	Ok(())
}

fn draw_background(
	state: &FieldState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) -> Result<(), JsValue> {
	let bg = &theme.background;
	ctx.set_fill_style_str(&bg.color.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	let (cx, cy) = (state.width / 2.0, state.height * bg.vignette_center_y);
	let gradient = ctx.create_radial_gradient(
		cx,
		cy,
		0.0,
		cx,
		cy,
		state.width.max(state.height) * bg.vignette_radius,
	)?;
	gradient.add_color_stop(0.0, &bg.vignette.to_css())?;
	gradient.add_color_stop(1.0, &bg.vignette.with_alpha(0.0).to_css())?;

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	Ok(())
}

fn swirl_gradient(
	ctx: &CanvasRenderingContext2d,
	stops: &SwirlGradient,
	swirl: &Swirl,
) -> Result<CanvasGradient, JsValue> {
	let gradient =
		ctx.create_radial_gradient(swirl.cx, swirl.cy, 0.0, swirl.cx, swirl.cy, swirl.radius)?;
	for &(offset, color) in &stops.stops {
		gradient.add_color_stop(offset as f32, &color.scale_alpha(swirl.alpha).to_css())?;
	}
	Ok(gradient)
}

fn draw_swirl(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	swirl: &Swirl,
	step: f64,
) -> Result<(), JsValue> {
	if swirl.alpha <= 0.0 || swirl.radius <= 0.0 {
		return Ok(());
	}

	let stops = match swirl.color {
		SwirlColor::Gold => &theme.swirl.gold,
		SwirlColor::Sky => &theme.swirl.sky,
	};
	let gradient = swirl_gradient(ctx, stops, swirl)?;

	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(theme.swirl.line_width);

	for arm in 0..ARM_COUNT {
		let points = swirl.arm_points(arm, step);
		let Some((&(x0, y0), rest)) = points.split_first() else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(x0, y0);
		for &(x, y) in rest {
			ctx.line_to(x, y);
		}
		ctx.stroke();
	}
	Ok(())
}

fn draw_particle(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	p: &Particle,
) -> Result<(), JsValue> {
	let intensity = p.intensity();
	let glow_radius = p.size * theme.glow.radius_factor;

	let gradient = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, glow_radius)?;
	gradient.add_color_stop(0.0, &p.color.to_css())?;
	gradient.add_color_stop(
		0.5,
		&p.color.with_alpha(theme.glow.mid_alpha * intensity).to_css(),
	)?;
	gradient.add_color_stop(1.0, &p.color.with_alpha(0.0).to_css())?;

	ctx.begin_path();
	ctx.arc(p.x, p.y, glow_radius, 0.0, 2.0 * PI)?;
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();

	ctx.begin_path();
	ctx.arc(p.x, p.y, p.size * intensity, 0.0, 2.0 * PI)?;
	ctx.set_fill_style_str(&p.color.to_css());
	ctx.fill();
	Ok(())
}
