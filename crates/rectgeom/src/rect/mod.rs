//! Axis-aligned rectangles as a pair of closed intervals.
//!
//! Purpose
//! - `Rect = x × y` with every operation delegated per axis to `Interval`.
//! - `contains` is the enclosure predicate: B is enclosed by A iff `A.contains(&B)`.
//!
//! Invariants
//! - Valid iff the x-interval is empty exactly when the y-interval is empty.
//! - `expanded` and `intersection` repair one-axis-empty results to `Rect::empty()`.
//! - `Rect::default()` is the degenerate point rectangle at the origin, a valid
//!   non-empty value distinct from `Rect::empty()`.
//!
//! Code cross-refs: `interval::Interval`, `point::Point`

use crate::interval::Interval;
use crate::point::Point;

/// Closed axis-aligned rectangle `x × y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: Interval,
    pub y: Interval,
}

impl Rect {
    #[inline]
    pub fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Canonical empty rectangle (both axes `Interval::empty()`).
    #[inline]
    pub fn empty() -> Self {
        Self {
            x: Interval::empty(),
            y: Interval::empty(),
        }
    }

    /// Bounding box of `points`; `Rect::default()` when `points` is empty.
    ///
    /// Seeded from the first point exactly so no extra origin is folded in.
    pub fn from_points(points: &[Point]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };
        let seed = Self {
            x: Interval::from_point(first.x),
            y: Interval::from_point(first.y),
        };
        rest.iter().fold(seed, |r, p| r.add_point(*p))
    }

    /// Smallest rectangle containing two opposite corners, in any order.
    #[inline]
    pub fn from_point_pair(a: Point, b: Point) -> Self {
        Self {
            x: Interval::from_point_pair(a.x, b.x),
            y: Interval::from_point_pair(a.y, b.y),
        }
    }

    /// Pre: both components of `size` are non-negative.
    #[inline]
    pub fn from_center_size(center: Point, size: Point) -> Self {
        Self {
            x: Interval::new(center.x - 0.5 * size.x, center.x + 0.5 * size.x),
            y: Interval::new(center.y - 0.5 * size.y, center.y + 0.5 * size.y),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x.is_empty() == self.y.is_empty()
    }

    /// Emptiness read off the x-axis; relies on `is_valid`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Corners counterclockwise from the lower-left.
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point::new(self.x.lo, self.y.lo),
            Point::new(self.x.hi, self.y.lo),
            Point::new(self.x.hi, self.y.hi),
            Point::new(self.x.lo, self.y.hi),
        ]
    }

    /// Corner `k mod 4` in the order of `vertices()`.
    #[inline]
    pub fn vertex(&self, k: usize) -> Point {
        let j = (k >> 1) & 1;
        self.vertex_ij(j ^ (k & 1), j)
    }

    /// Corner selected by bits: `i == 1` picks `x.hi`, `j == 1` picks `y.hi`.
    #[inline]
    pub fn vertex_ij(&self, i: usize, j: usize) -> Point {
        Point::new(
            if i == 1 { self.x.hi } else { self.x.lo },
            if j == 1 { self.y.hi } else { self.y.lo },
        )
    }

    #[inline]
    pub fn lo(&self) -> Point {
        Point::new(self.x.lo, self.y.lo)
    }

    #[inline]
    pub fn hi(&self) -> Point {
        Point::new(self.x.hi, self.y.hi)
    }

    /// Pre: non-empty.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x.center(), self.y.center())
    }

    /// Per-axis length; negative components mark an empty rectangle.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.x.length(), self.y.length())
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    #[inline]
    pub fn interior_contains_point(&self, p: Point) -> bool {
        self.x.interior_contains(p.x) && self.y.interior_contains(p.y)
    }

    /// Closed enclosure of `other`. The empty rectangle is contained in every
    /// rectangle; a non-empty rectangle is never contained in an empty one.
    #[inline]
    pub fn contains(&self, other: &Rect) -> bool {
        self.x.contains_interval(&other.x) && self.y.contains_interval(&other.y)
    }

    #[inline]
    pub fn interior_contains(&self, other: &Rect) -> bool {
        self.x.interior_contains_interval(&other.x) && self.y.interior_contains_interval(&other.y)
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y)
    }

    #[inline]
    pub fn interior_intersects(&self, other: &Rect) -> bool {
        self.x.interior_intersects(&other.x) && self.y.interior_intersects(&other.y)
    }

    /// Minimal expansion containing `p`.
    #[inline]
    pub fn add_point(&self, p: Point) -> Rect {
        Rect {
            x: self.x.add_point(p.x),
            y: self.y.add_point(p.y),
        }
    }

    /// Minimal expansion containing `other`; same as `union`.
    #[inline]
    pub fn add_rect(&self, other: &Rect) -> Rect {
        self.union(other)
    }

    /// Closest point of the rectangle to `p`. Pre: non-empty.
    #[inline]
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(self.x.clamp_point(p.x), self.y.clamp_point(p.y))
    }

    /// Grow by `margin.x` left/right and `margin.y` below/above (shrink if negative).
    ///
    /// If either axis collapses, the result is `Rect::empty()`.
    pub fn expanded(&self, margin: Point) -> Rect {
        let x = self.x.expanded(margin.x);
        let y = self.y.expanded(margin.y);
        if x.is_empty() || y.is_empty() {
            return Rect::empty();
        }
        Rect { x, y }
    }

    #[inline]
    pub fn expanded_by_margin(&self, margin: f64) -> Rect {
        self.expanded(Point::new(margin, margin))
    }

    #[inline]
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x: self.x.union(&other.x),
            y: self.y.union(&other.y),
        }
    }

    /// Per-axis intersection; `Rect::empty()` if the rectangles are disjoint on any axis.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.intersection(&other.x);
        let y = self.y.intersection(&other.y);
        if x.is_empty() || y.is_empty() {
            return Rect::empty();
        }
        Rect { x, y }
    }

    #[inline]
    pub fn approx_equal(&self, other: &Rect) -> bool {
        self.x.approx_equal(&other.x) && self.y.approx_equal(&other.y)
    }

    #[inline]
    pub fn approx_equal_eps(&self, other: &Rect, eps: f64) -> bool {
        self.x.approx_equal_eps(&other.x, eps) && self.y.approx_equal_eps(&other.y, eps)
    }
}
