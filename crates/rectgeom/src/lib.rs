//! 2D geometry primitives: points, closed intervals, axis-aligned rectangles.
//!
//! Layering (leaf first)
//! - `point`: `Point = nalgebra::Vector2<f64>` plus small vector helpers.
//! - `interval`: closed `[lo, hi]` with empty-by-relation (`lo > hi`) semantics.
//! - `rect`: `Rect = x × y`, every operation delegated per axis to `Interval`.
//!
//! All types are `Copy` values; every operation is a pure function returning a
//! new value. Degenerate cases are encoded in the representation (empty
//! intervals, negative lengths) rather than reported as errors.

mod cfg;
pub mod interval;
pub mod point;
pub mod rand;
pub mod rect;

pub use cfg::DEFAULT_APPROX_EPS;
pub use interval::Interval;
pub use point::Point;
pub use rect::Rect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// True iff `inner` is enclosed by `outer` (closed containment on both axes).
///
/// The empty rectangle is enclosed by everything; nothing non-empty is enclosed
/// by the empty rectangle.
#[inline]
pub fn is_enclosed_by(inner: &Rect, outer: &Rect) -> bool {
    outer.contains(inner)
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::interval::Interval;
    pub use crate::is_enclosed_by;
    pub use crate::point::{cross, normalize, ortho, Point};
    pub use crate::rand::{draw_point_in, draw_rect, RectCfg, ReplayToken};
    pub use crate::rect::Rect;
    pub use nalgebra::vector;
}
