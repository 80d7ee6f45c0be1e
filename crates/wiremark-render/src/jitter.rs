//! Deterministic edge jitter for the hand-drawn theme.
//!
//! Offsets come from a splitmix64-style bit mix seeded with the shape's own
//! quantized coordinates, never from a process RNG. The same rect therefore
//! wobbles identically on every render, which keeps render output a pure
//! function of its inputs.

use std::fmt::Write;

fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// A stream of offsets in `[-amplitude, amplitude]`, seeded by geometry.
pub(crate) struct Wobble {
    state: u64,
    amplitude: f64,
}

impl Wobble {
    /// Seed from a shape's coordinates. Values are quantized to eighth
    /// pixels so that floating-point noise cannot change the seed.
    pub(crate) fn new(coords: &[f64], amplitude: f64) -> Self {
        let mut state = 0x5bf0_3635_0cbe_a10du64;
        for &c in coords {
            state = mix(state ^ ((c * 8.0).round() as i64 as u64));
        }
        Self { state, amplitude }
    }

    /// Next offset in the stream.
    pub(crate) fn next_offset(&mut self) -> f64 {
        self.state = mix(self.state);
        // Top 53 bits to a float in [0, 1)
        let unit = (self.state >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * self.amplitude
    }
}

/// Path data for a rectangle whose edges bow like a quick pencil stroke.
///
/// Corners shift by a fraction of the amplitude and each edge becomes a
/// quadratic curve with a displaced midpoint.
pub(crate) fn wobbly_rect_path(x: f64, y: f64, w: f64, h: f64, amplitude: f64) -> String {
    let mut rng = Wobble::new(&[x, y, w, h], amplitude);
    let mut corner = |cx: f64, cy: f64| {
        (
            cx + rng.next_offset() * 0.5,
            cy + rng.next_offset() * 0.5,
        )
    };
    let c0 = corner(x, y);
    let c1 = corner(x + w, y);
    let c2 = corner(x + w, y + h);
    let c3 = corner(x, y + h);

    let mut path = String::with_capacity(160);
    let _ = write!(path, "M {:.2} {:.2}", c0.0, c0.1);
    for (from, to) in [(c0, c1), (c1, c2), (c2, c3), (c3, c0)] {
        let mx = (from.0 + to.0) / 2.0 + rng.next_offset();
        let my = (from.1 + to.1) / 2.0 + rng.next_offset();
        let _ = write!(path, " Q {mx:.2} {my:.2} {:.2} {:.2}", to.0, to.1);
    }
    path.push_str(" Z");
    path
}

/// Path data for a line with a single bowed midpoint.
pub(crate) fn wobbly_line_path(x1: f64, y1: f64, x2: f64, y2: f64, amplitude: f64) -> String {
    let mut rng = Wobble::new(&[x1, y1, x2, y2], amplitude);
    let mx = (x1 + x2) / 2.0 + rng.next_offset();
    let my = (y1 + y2) / 2.0 + rng.next_offset();
    format!("M {x1:.2} {y1:.2} Q {mx:.2} {my:.2} {x2:.2} {y2:.2}")
}
