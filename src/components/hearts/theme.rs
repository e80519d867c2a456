//! Visual styling for the floating hearts.
//!
//! Provides the accent color and the ranges every heart is drawn from.

use log::warn;

use crate::config::HeartConfig;

/// Upper bound on the configured pool size.
pub const MAX_COUNT: usize = 500;
/// Slowest configurable rise, in pixels per frame. Hearts must always climb.
pub const MIN_SPEED: f64 = 0.05;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
	/// Returns `None` for anything else.
	pub fn parse(color_str: &str) -> Option<Self> {
		let color_str = color_str.trim();
		if let Some(hex) = color_str.strip_prefix('#') {
			if hex.len() != 6 || !hex.is_ascii() {
				return None;
			}
			let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
			let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
			let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
			Some(Self::rgb(r, g, b))
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.collect();
			let r = nums.first()?.trim().parse().ok()?;
			let g = nums.get(1)?.trim().parse().ok()?;
			let b = nums.get(2)?.trim().parse().ok()?;
			let a = nums
				.get(3)
				.and_then(|s| s.trim().parse().ok())
				.unwrap_or(1.0);
			Some(Self::rgba(r, g, b, a))
		} else {
			None
		}
	}
}

/// Rose gold, the page's accent color.
pub const ROSE_GOLD: Color = Color::rgb(183, 110, 121);

/// Floating heart configuration.
///
/// Every range is half-open: a heart drawn from it lands in `[min, max)`.
#[derive(Clone, Debug)]
pub struct HeartStyle {
	/// Number of hearts in the pool. Fixed for the life of the page.
	pub count: usize,
	/// Fill color. Each heart's own opacity is applied on top.
	pub color: Color,
	pub size_min: f64,
	pub size_max: f64,
	/// Upward speed in pixels per frame.
	pub speed_min: f64,
	pub speed_max: f64,
	/// Horizontal drift is drawn from `[-drift, drift)` pixels per frame.
	pub drift: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// How far past an edge a heart may travel before it is recycled.
	pub reset_margin: f64,
	/// Height of the band below the bottom edge that new hearts spawn in.
	pub spawn_band: f64,
}

/// Clamps a configured value into `[lo, hi]`, warning when it had to move.
fn clamp_field(field: &str, value: f64, lo: f64, hi: f64) -> f64 {
	if (lo..=hi).contains(&value) {
		return value;
	}
	let clamped = if value.is_nan() { lo } else { value.clamp(lo, hi) };
	warn!("valentine-scrapbook: hearts.{field} {value} out of range, using {clamped}");
	clamped
}

impl HeartStyle {
	/// Builds a style from page configuration.
	///
	/// Out-of-range fields are clamped so every heart keeps a non-negative
	/// size, an opacity in `[0, 1]` and a strictly positive upward speed. An
	/// unparseable color falls back to the default accent.
	pub fn from_config(config: &HeartConfig) -> Self {
		let defaults = Self::default();
		let color = Color::parse(&config.color).unwrap_or_else(|| {
			warn!(
				"valentine-scrapbook: unrecognised heart color {:?}, using default",
				config.color
			);
			defaults.color
		});

		let count = if config.count > MAX_COUNT {
			warn!(
				"valentine-scrapbook: hearts.count {} too large, using {MAX_COUNT}",
				config.count
			);
			MAX_COUNT
		} else {
			config.count
		};

		let size_min = clamp_field("size_min", config.size_min, 0.0, f64::MAX);
		let speed_min = clamp_field("speed_min", config.speed_min, MIN_SPEED, f64::MAX);
		let opacity_min = clamp_field("opacity_min", config.opacity_min, 0.0, 1.0);

		Self {
			count,
			color,
			size_min,
			size_max: clamp_field("size_max", config.size_max, size_min, f64::MAX),
			speed_min,
			speed_max: clamp_field("speed_max", config.speed_max, speed_min, f64::MAX),
			drift: clamp_field("drift", config.drift.abs(), 0.0, f64::MAX),
			opacity_min,
			opacity_max: clamp_field("opacity_max", config.opacity_max, opacity_min, 1.0),
			..defaults
		}
	}
}

impl Default for HeartStyle {
	fn default() -> Self {
		Self {
			count: 15,
			color: ROSE_GOLD,
			size_min: 15.0,
			size_max: 35.0,
			speed_min: 0.5,
			speed_max: 2.0,
			drift: 1.0,
			opacity_min: 0.3,
			opacity_max: 0.8,
			reset_margin: 50.0,
			spawn_band: 100.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_and_functional_colors() {
		assert_eq!(Color::parse("#b76e79"), Some(ROSE_GOLD));
		assert_eq!(
			Color::parse("rgba(10, 20, 30, 0.5)"),
			Some(Color::rgba(10, 20, 30, 0.5))
		);
		assert_eq!(Color::parse("rgb(1,2,3)"), Some(Color::rgb(1, 2, 3)));
		assert_eq!(Color::parse("rose"), None);
		assert_eq!(Color::parse("#12345"), None);
	}

	#[test]
	fn css_output_drops_alpha_when_opaque() {
		assert_eq!(ROSE_GOLD.to_css(), "#b76e79");
		assert_eq!(Color::rgba(1, 2, 3, 0.25).to_css(), "rgba(1, 2, 3, 0.25)");
	}

	#[test]
	fn config_ranges_are_never_inverted() {
		let config = HeartConfig {
			size_min: 40.0,
			size_max: 10.0,
			color: "not a color".into(),
			..HeartConfig::default()
		};
		let style = HeartStyle::from_config(&config);
		assert!(style.size_max >= style.size_min);
		assert_eq!(style.color, ROSE_GOLD);
	}

	#[test]
	fn config_values_are_clamped_into_range() {
		let config = HeartConfig {
			count: 1_000_000,
			size_min: -30.0,
			size_max: -10.0,
			speed_min: -2.0,
			speed_max: -1.0,
			opacity_min: -0.5,
			opacity_max: 4.0,
			drift: -3.0,
			..HeartConfig::default()
		};
		let style = HeartStyle::from_config(&config);
		assert_eq!(style.count, MAX_COUNT);
		assert_eq!((style.size_min, style.size_max), (0.0, 0.0));
		assert_eq!((style.speed_min, style.speed_max), (MIN_SPEED, MIN_SPEED));
		assert_eq!((style.opacity_min, style.opacity_max), (0.0, 1.0));
		assert_eq!(style.drift, 3.0);
	}

	#[test]
	fn clamped_config_still_rises_and_recycles() {
		use rand::SeedableRng;
		use rand::rngs::StdRng;

		use crate::components::hearts::HeartField;

		let config = HeartConfig {
			size_min: -30.0,
			speed_min: -2.0,
			speed_max: -1.0,
			opacity_max: 4.0,
			..HeartConfig::default()
		};
		let style = HeartStyle::from_config(&config);
		let lower = -style.reset_margin - style.speed_max;
		let mut field = HeartField::new(style, 800.0, 600.0, StdRng::seed_from_u64(17));
		for _ in 0..1_000 {
			field.tick();
			for heart in field.hearts() {
				assert!(heart.speed > 0.0, "speed {}", heart.speed);
				assert!(heart.size >= 0.0, "size {}", heart.size);
				assert!((0.0..=1.0).contains(&heart.opacity), "opacity {}", heart.opacity);
				assert!(heart.y >= lower && heart.y <= 700.0, "y {}", heart.y);
			}
		}
	}

	#[test]
	fn in_range_config_passes_through() {
		let style = HeartStyle::from_config(&HeartConfig::default());
		let defaults = HeartStyle::default();
		assert_eq!(style.count, defaults.count);
		assert_eq!((style.speed_min, style.speed_max), (0.5, 2.0));
		assert_eq!((style.opacity_min, style.opacity_max), (0.3, 0.8));
	}
}
