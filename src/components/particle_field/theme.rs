//! Visual theming for the particle field.
//!
//! Provides the structured color type, the particle palette, and the gradient
//! stops used for the background wash and the two swirl color modes.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
	/// Alpha in `[0, 1]`
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with the alpha channel replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	/// Same color with the alpha channel multiplied by `factor`.
	pub fn scale_alpha(self, factor: f64) -> Self {
		self.with_alpha(self.a * factor)
	}

	/// CSS color string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors particles are drawn from.
#[derive(Clone, Debug)]
pub struct ParticlePalette {
	/// Palette entries, picked uniformly
	pub colors: Vec<Color>,
}

impl ParticlePalette {
	/// Warm golds, pale blues and violet on near-white
	pub fn starlight() -> Self {
		Self {
			colors: vec![
				Color::rgba(255, 215, 128, 0.8), // Pale gold
				Color::rgba(255, 184, 92, 0.8),  // Amber
				Color::rgba(173, 216, 255, 0.8), // Ice blue
				Color::rgba(135, 170, 255, 0.8), // Cornflower
				Color::rgba(196, 166, 255, 0.8), // Lilac
				Color::rgba(255, 255, 255, 0.8), // White
			],
		}
	}

	/// Color at `index`, wrapping around the palette.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	/// Number of colors.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// True when the palette has no colors.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

/// Background wash beneath everything else.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Opaque base fill
	pub color: Color,
	/// Vignette color at its center; fades to transparent at the rim
	pub vignette: Color,
	/// Vertical position of the vignette center as a fraction of height
	pub vignette_center_y: f64,
	/// Vignette radius as a fraction of the larger viewport side
	pub vignette_radius: f64,
}

/// Gradient stops for one swirl color mode, as `(offset, color)` pairs.
///
/// The swirl alpha multiplies every stop; the last stop should be transparent.
#[derive(Clone, Debug)]
pub struct SwirlGradient {
	/// Stops from the center outwards
	pub stops: Vec<(f64, Color)>,
}

/// Swirl stroke style.
#[derive(Clone, Debug)]
pub struct SwirlStyle {
	/// Warm amber stops
	pub gold: SwirlGradient,
	/// Cool blue-violet stops
	pub sky: SwirlGradient,
	/// Stroke width of each arm
	pub line_width: f64,
}

/// Particle glow style.
#[derive(Clone, Debug)]
pub struct GlowStyle {
	/// Glow radius as a multiple of particle size
	pub radius_factor: f64,
	/// Alpha at the middle stop, multiplied by twinkle intensity
	pub mid_alpha: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme identifier
	pub name: &'static str,
	/// Base fill and vignette
	pub background: BackgroundStyle,
	/// Swirl gradients and stroke width
	pub swirl: SwirlStyle,
	/// Particle glow
	pub glow: GlowStyle,
	/// Particle colors
	pub palette: ParticlePalette,
}

impl Theme {
	/// Deep navy night sky with gold and sky-blue accents (default)
	pub fn night_sky() -> Self {
		Self {
			name: "night_sky",
			background: BackgroundStyle {
				color: Color::rgb(8, 11, 30),
				vignette: Color::rgba(48, 56, 120, 0.45),
				vignette_center_y: 0.35,
				vignette_radius: 0.8,
			},
			swirl: SwirlStyle {
				gold: SwirlGradient {
					stops: vec![
						(0.0, Color::rgba(255, 214, 120, 0.5)),
						(0.5, Color::rgba(255, 170, 60, 0.25)),
						(1.0, Color::rgba(255, 140, 0, 0.0)),
					],
				},
				sky: SwirlGradient {
					stops: vec![
						(0.0, Color::rgba(150, 200, 255, 0.5)),
						(0.5, Color::rgba(140, 120, 255, 0.25)),
						(1.0, Color::rgba(120, 80, 220, 0.0)),
					],
				},
				line_width: 3.0,
			},
			glow: GlowStyle {
				radius_factor: 3.0,
				mid_alpha: 0.3,
			},
			palette: ParticlePalette::starlight(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::night_sky()
	}
}
