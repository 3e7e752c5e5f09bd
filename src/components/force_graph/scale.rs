//! Color scale for edge weights.

/// Viridis sampled at nine evenly spaced stops.
const VIRIDIS: [(u8, u8, u8); 9] = [
	(0x44, 0x01, 0x54),
	(0x47, 0x2d, 0x7b),
	(0x3b, 0x52, 0x8b),
	(0x2c, 0x72, 0x8e),
	(0x21, 0x91, 0x8c),
	(0x28, 0xae, 0x80),
	(0x5e, 0xc9, 0x62),
	(0xad, 0xdc, 0x30),
	(0xfd, 0xe7, 0x25),
];

/// Linear map from a data interval onto `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalize {
	pub min: f64,
	pub max: f64,
}

impl Normalize {
	/// Spans the given values; `None` for an empty iterator.
	pub fn spanning(values: impl IntoIterator<Item = f64>) -> Option<Self> {
		values.into_iter().fold(None, |acc, v| match acc {
			None => Some(Normalize { min: v, max: v }),
			Some(n) => Some(Normalize {
				min: n.min.min(v),
				max: n.max.max(v),
			}),
		})
	}

	/// A degenerate interval maps everything to 0.
	pub fn apply(&self, value: f64) -> f64 {
		let span = self.max - self.min;
		if span <= f64::EPSILON {
			return 0.0;
		}
		((value - self.min) / span).clamp(0.0, 1.0)
	}
}

/// Viridis color for `t` in `[0, 1]` as a `#rrggbb` string. Out-of-range
/// input is clamped.
pub fn viridis(t: f64) -> String {
	let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
	let pos = t * (VIRIDIS.len() - 1) as f64;
	let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
	let f = pos - i as f64;
	let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
	let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
	format!(
		"#{:02x}{:02x}{:02x}",
		lerp(a.0, b.0),
		lerp(a.1, b.1),
		lerp(a.2, b.2)
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints_match_colormap() {
		assert_eq!(viridis(0.0), "#440154");
		assert_eq!(viridis(1.0), "#fde725");
		assert_eq!(viridis(0.5), "#21918c");
	}

	#[test]
	fn clamps_out_of_range() {
		assert_eq!(viridis(-3.0), viridis(0.0));
		assert_eq!(viridis(7.0), viridis(1.0));
		assert_eq!(viridis(f64::NAN), viridis(0.0));
	}

	#[test]
	fn normalize_spans_weights() {
		let norm = Normalize::spanning([0.4, 0.1, 0.3]).unwrap();
		assert_eq!(norm, Normalize { min: 0.1, max: 0.4 });
		assert_eq!(norm.apply(0.1), 0.0);
		assert_eq!(norm.apply(0.4), 1.0);
		assert_eq!(norm.apply(0.9), 1.0);
		assert!(Normalize::spanning(std::iter::empty()).is_none());
	}

	#[test]
	fn degenerate_span_maps_to_zero() {
		let norm = Normalize::spanning([0.5, 0.5]).unwrap();
		assert_eq!(norm.apply(0.5), 0.0);
	}
}
