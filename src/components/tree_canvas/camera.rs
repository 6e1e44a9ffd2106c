use std::time::Duration;

/// Screen = world * k + (x, y).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// Axis-aligned world-space box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	pub fn around(x: f64, y: f64) -> Self {
		Self {
			min_x: x,
			min_y: y,
			max_x: x,
			max_y: y,
		}
	}

	pub fn include(&mut self, x: f64, y: f64) {
		self.min_x = self.min_x.min(x);
		self.min_y = self.min_y.min(y);
		self.max_x = self.max_x.max(x);
		self.max_y = self.max_y.max(y);
	}

	pub fn grow(self, margin: f64) -> Self {
		Self {
			min_x: self.min_x - margin,
			min_y: self.min_y - margin,
			max_x: self.max_x + margin,
			max_y: self.max_y + margin,
		}
	}

	fn center(&self) -> (f64, f64) {
		(
			(self.min_x + self.max_x) / 2.0,
			(self.min_y + self.max_y) / 2.0,
		)
	}
}

/// Transform that shows `bounds` centred in a `width` x `height` viewport,
/// leaving `padding` (a fraction of the viewport) free on each axis.
pub fn fit(bounds: Bounds, width: f64, height: f64, padding: f64, zoom: (f64, f64)) -> ViewTransform {
	let usable = (1.0 - padding).max(0.05);
	let (bw, bh) = (
		(bounds.max_x - bounds.min_x).max(1.0),
		(bounds.max_y - bounds.min_y).max(1.0),
	);
	let k = (width * usable / bw).min(height * usable / bh).clamp(zoom.0, zoom.1);
	let (cx, cy) = bounds.center();
	ViewTransform {
		x: width / 2.0 - cx * k,
		y: height / 2.0 - cy * k,
		k,
	}
}

/// Zooms by `factor` keeping the screen point (`sx`, `sy`) fixed.
pub fn zoom_about(t: ViewTransform, sx: f64, sy: f64, factor: f64, zoom: (f64, f64)) -> ViewTransform {
	let k = (t.k * factor).clamp(zoom.0, zoom.1);
	let ratio = k / t.k;
	ViewTransform {
		x: sx - (sx - t.x) * ratio,
		y: sy - (sy - t.y) * ratio,
		k,
	}
}

fn ease_in_out_cubic(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// An animated move between two transforms.
#[derive(Clone, Debug)]
pub struct CameraTween {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
	duration: f64,
}

impl CameraTween {
	pub fn new(from: ViewTransform, to: ViewTransform, duration: Duration) -> Self {
		Self {
			from,
			to,
			elapsed: 0.0,
			duration: duration.as_secs_f64(),
		}
	}

	pub fn target(&self) -> ViewTransform {
		self.to
	}

	/// Advances by `dt` seconds; returns the current transform and whether
	/// the tween has finished.
	pub fn advance(&mut self, dt: f64) -> (ViewTransform, bool) {
		self.elapsed += dt;
		if self.duration <= 0.0 || self.elapsed >= self.duration {
			return (self.to, true);
		}
		let t = ease_in_out_cubic(self.elapsed / self.duration);
		let lerp = |a: f64, b: f64| a + (b - a) * t;
		(
			ViewTransform {
				x: lerp(self.from.x, self.to.x),
				y: lerp(self.from.y, self.to.y),
				k: lerp(self.from.k, self.to.k),
			},
			false,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ZOOM: (f64, f64) = (0.1, 2.0);

	fn to_screen(t: ViewTransform, x: f64, y: f64) -> (f64, f64) {
		(x * t.k + t.x, y * t.k + t.y)
	}

	#[test]
	fn fit_centres_bounds() {
		let bounds = Bounds {
			min_x: -100.0,
			min_y: 0.0,
			max_x: 100.0,
			max_y: 50.0,
		};
		let t = fit(bounds, 400.0, 300.0, 0.0, ZOOM);
		assert_eq!(t.k, 2.0);
		assert_eq!(to_screen(t, 0.0, 25.0), (200.0, 150.0));
	}

	#[test]
	fn fit_respects_zoom_limits() {
		let huge = Bounds {
			min_x: 0.0,
			min_y: 0.0,
			max_x: 1e6,
			max_y: 1e6,
		};
		assert_eq!(fit(huge, 100.0, 100.0, 0.2, ZOOM).k, 0.1);
		assert_eq!(fit(Bounds::around(5.0, 5.0), 100.0, 100.0, 0.2, ZOOM).k, 2.0);
	}

	#[test]
	fn zoom_keeps_anchor_fixed() {
		let t = ViewTransform {
			x: 10.0,
			y: 20.0,
			k: 1.0,
		};
		let before = ((50.0 - t.x) / t.k, (60.0 - t.y) / t.k);
		let z = zoom_about(t, 50.0, 60.0, 1.5, ZOOM);
		assert_eq!(z.k, 1.5);
		assert_eq!(to_screen(z, before.0, before.1), (50.0, 60.0));
	}

	#[test]
	fn tween_reaches_target() {
		let from = ViewTransform {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		};
		let to = ViewTransform {
			x: 100.0,
			y: -40.0,
			k: 2.0,
		};
		let mut tween = CameraTween::new(from, to, Duration::from_millis(300));
		let (mid, done) = tween.advance(0.15);
		assert!(!done);
		assert!((mid.x - 50.0).abs() < 1e-9);
		let (end, done) = tween.advance(0.2);
		assert!(done);
		assert_eq!(end, to);
	}
}
