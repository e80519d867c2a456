//! The floating heart pool.
//!
//! A fixed number of hearts rise from below the viewport. A heart that leaves
//! through the top is recycled in place with fresh random fields, so the pool
//! never grows or shrinks and hearts desynchronise on their own.

use rand::Rng;

use super::theme::HeartStyle;

/// A single floating heart.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	/// Pixels risen per frame. Always positive.
	pub speed: f64,
	/// Pixels moved sideways per frame.
	pub drift: f64,
	pub opacity: f64,
}

/// Owns the heart pool, the viewport bounds it lives in, and its random source.
pub struct HeartField<R> {
	hearts: Vec<Heart>,
	style: HeartStyle,
	width: f64,
	height: f64,
	rng: R,
}

/// Uniform sample from `[min, max)`. Degenerate ranges yield `min`.
fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
	min + rng.r#gen::<f64>() * (max - min)
}

impl<R: Rng> HeartField<R> {
	/// Fills the pool with `style.count` hearts, all spawned below the bottom edge.
	pub fn new(style: HeartStyle, width: f64, height: f64, mut rng: R) -> Self {
		let hearts = (0..style.count)
			.map(|_| Self::spawn(&style, width, height, &mut rng))
			.collect();

		Self {
			hearts,
			style,
			width,
			height,
			rng,
		}
	}

	/// Fresh bottom-anchored heart. Negative bounds are treated as zero.
	fn spawn(style: &HeartStyle, width: f64, height: f64, rng: &mut R) -> Heart {
		let (width, height) = (width.max(0.0), height.max(0.0));
		Heart {
			x: sample(rng, 0.0, width),
			y: sample(rng, height, height + style.spawn_band),
			size: sample(rng, style.size_min, style.size_max),
			speed: sample(rng, style.speed_min, style.speed_max),
			opacity: sample(rng, style.opacity_min, style.opacity_max),
			drift: sample(rng, -style.drift, style.drift),
		}
	}

	/// Advance every heart by one frame.
	pub fn tick(&mut self) {
		let margin = self.style.reset_margin;
		let width = self.width.max(0.0);

		for i in 0..self.hearts.len() {
			let heart = &mut self.hearts[i];
			heart.y -= heart.speed;
			heart.x += heart.drift;

			if heart.y < -margin {
				self.hearts[i] = Self::spawn(&self.style, self.width, self.height, &mut self.rng);
				continue;
			}

			if heart.x < -margin || heart.x > width + margin {
				heart.x = sample(&mut self.rng, 0.0, width);
			}
		}
	}

	/// Update the viewport bounds. Hearts keep their positions; new bounds
	/// only apply to future resets and wraps.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

impl<R> HeartField<R> {
	pub fn hearts(&self) -> &[Heart] {
		&self.hearts
	}

	pub fn style(&self) -> &HeartStyle {
		&self.style
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}
