//! Seeded random rectangles (replay tokens).
//!
//! Purpose
//! - Deterministic sampler for valid rectangles used by benches, demos, and
//!   randomized checks. Every draw is indexed by a `(seed, index)` token so a
//!   failing case can be replayed on its own.
//!
//! Model
//! - Center uniform in `center_range²`, side lengths uniform in `[0, max_size]`.
//! - With probability `degenerate_prob` one axis (or both) collapses to a point,
//!   so edge cases of closed containment are hit regularly.
//!
//! Code cross-refs: `rect::Rect`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::rect::Rect;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RectCfg {
    /// Centers are drawn from `[-center_range, center_range]` on each axis.
    pub center_range: f64,
    /// Upper bound on each side length.
    pub max_size: f64,
    /// Probability of collapsing one or both axes to a point. Clamped to [0, 1]; NaN counts as 0.
    pub degenerate_prob: f64,
}

impl Default for RectCfg {
    fn default() -> Self {
        Self {
            center_range: 10.0,
            max_size: 5.0,
            degenerate_prob: 0.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a valid, non-empty rectangle.
///
/// Returns `None` if `center_range` or `max_size` is not finite.
pub fn draw_rect(cfg: RectCfg, tok: ReplayToken) -> Option<Rect> {
    if !cfg.center_range.is_finite() || !cfg.max_size.is_finite() {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let cr = cfg.center_range.abs();
    let ms = cfg.max_size.max(0.0);
    // Scaled unit draws: `gen_range` rejects spans that overflow to infinity.
    let center = Point::new(
        cr * (2.0 * rng.gen::<f64>() - 1.0),
        cr * (2.0 * rng.gen::<f64>() - 1.0),
    );
    let mut size = Point::new(ms * rng.gen::<f64>(), ms * rng.gen::<f64>());
    let p_degenerate = if cfg.degenerate_prob.is_nan() {
        0.0
    } else {
        cfg.degenerate_prob.clamp(0.0, 1.0)
    };
    if rng.gen_bool(p_degenerate) {
        match rng.gen_range(0..3u8) {
            0 => size.x = 0.0,
            1 => size.y = 0.0,
            _ => size = Point::zeros(),
        }
    }
    Some(Rect::from_center_size(center, size))
}

/// Draw a point of `rect` (boundary included); `None` if `rect` is empty.
pub fn draw_point_in(rect: &Rect, tok: ReplayToken) -> Option<Point> {
    if rect.is_empty() {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let tx: f64 = rng.gen();
    let ty: f64 = rng.gen();
    // Clamp guards against rounding past `hi` on long intervals.
    let p = Point::new(
        rect.x.lo + tx * rect.x.length(),
        rect.y.lo + ty * rect.y.length(),
    );
    Some(rect.clamp_point(p))
}
