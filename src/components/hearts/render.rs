//! Canvas rendering for the floating hearts.
//!
//! Each frame clears the whole surface and fills every heart in pool order.
//! Hearts are semi-transparent and rarely overlap, so no depth sorting.

use web_sys::CanvasRenderingContext2d;

use super::field::{Heart, HeartField};

/// One cubic Bézier segment: two control points and an end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier {
	pub c1: (f64, f64),
	pub c2: (f64, f64),
	pub end: (f64, f64),
}

/// Closed heart outline: a start point and four curves returning to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPath {
	pub start: (f64, f64),
	pub curves: [Bezier; 4],
}

impl HeartPath {
	/// Outline of a heart of `size` whose top cleft sits at `(x, y)`.
	pub fn new(x: f64, y: f64, size: f64) -> Self {
		let half = size / 2.0;
		Self {
			start: (x, y + size / 4.0),
			curves: [
				Bezier {
					c1: (x, y),
					c2: (x - half, y - half),
					end: (x - half, y + size / 6.0),
				},
				Bezier {
					c1: (x - half, y + size / 3.0),
					c2: (x, y + half),
					end: (x, y + size),
				},
				Bezier {
					c1: (x, y + half),
					c2: (x + half, y + size / 3.0),
					end: (x + half, y + size / 6.0),
				},
				Bezier {
					c1: (x + half, y - half),
					c2: (x, y),
					end: (x, y + size / 4.0),
				},
			],
		}
	}
}

/// Clears the canvas and draws every heart.
pub fn render<R>(field: &HeartField<R>, ctx: &CanvasRenderingContext2d) {
	let (width, height) = (field.width().max(0.0), field.height().max(0.0));
	ctx.clear_rect(0.0, 0.0, width, height);

	let fill = field.style().color.to_css();
	for heart in field.hearts() {
		draw_heart(ctx, heart, &fill);
	}
}

fn draw_heart(ctx: &CanvasRenderingContext2d, heart: &Heart, fill: &str) {
	let path = HeartPath::new(heart.x, heart.y, heart.size);

	ctx.save();
	ctx.set_global_alpha(heart.opacity);
	ctx.set_fill_style_str(fill);

	ctx.begin_path();
	ctx.move_to(path.start.0, path.start.1);
	for curve in &path.curves {
		ctx.bezier_curve_to(
			curve.c1.0,
			curve.c1.1,
			curve.c2.0,
			curve.c2.1,
			curve.end.0,
			curve.end.1,
		);
	}
	ctx.fill();
	ctx.restore();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn outline_is_closed() {
		let path = HeartPath::new(100.0, 200.0, 24.0);
		assert_eq!(path.curves[3].end, path.start);
	}

	#[test]
	fn outline_is_mirror_symmetric() {
		let (x, size) = (50.0, 30.0);
		let path = HeartPath::new(x, 10.0, size);
		let mirror = |p: (f64, f64)| (2.0 * x - p.0, p.1);

		assert_eq!(mirror(path.curves[0].end), path.curves[2].end);
		assert_eq!(mirror(path.curves[0].c2), path.curves[3].c1);
		assert_eq!(mirror(path.curves[1].c1), path.curves[2].c2);
	}

	#[test]
	fn outline_scales_with_size() {
		let path = HeartPath::new(0.0, 0.0, 20.0);
		assert_eq!(path.start, (0.0, 5.0));
		assert_eq!(path.curves[1].end, (0.0, 20.0));
		assert_eq!(path.curves[0].end.0, -10.0);
		assert_eq!(path.curves[2].end.0, 10.0);
	}
}
