//! Closed intervals `[lo, hi]` on the real line.
//!
//! Purpose
//! - One axis of a `Rect`. All edge-case policy of the rectangle layer lives here.
//!
//! Conventions
//! - Empty by relation: any pair with `lo > hi` is the empty set. `Interval::empty()`
//!   returns the canonical `[1, 0]`, but every empty pair compares equal.
//! - `length()` of an empty interval is negative, not zero.
//! - The empty interval is contained in every interval and intersects none.
//!
//! Code cross-refs: `rect::Rect`, `cfg::DEFAULT_APPROX_EPS`

use crate::cfg::DEFAULT_APPROX_EPS;

/// Closed interval `{ t : lo <= t <= hi }`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Canonical empty interval `[1, 0]`.
    #[inline]
    pub fn empty() -> Self {
        Self { lo: 1.0, hi: 0.0 }
    }

    /// Degenerate interval containing the single point `v`.
    #[inline]
    pub fn from_point(v: f64) -> Self {
        Self { lo: v, hi: v }
    }

    /// Smallest interval containing both `a` and `b`, in either order.
    #[inline]
    pub fn from_point_pair(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Structural equality, with all empty representations identified.
    #[inline]
    pub fn equal(&self, other: &Interval) -> bool {
        (self.lo == other.lo && self.hi == other.hi) || (self.is_empty() && other.is_empty())
    }

    /// Midpoint. Meaningless for an empty interval.
    #[inline]
    pub fn center(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// `hi - lo`; negative iff the interval is empty.
    #[inline]
    pub fn length(&self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn contains(&self, p: f64) -> bool {
        self.lo <= p && p <= self.hi
    }

    #[inline]
    pub fn interior_contains(&self, p: f64) -> bool {
        self.lo < p && p < self.hi
    }

    /// Closed containment of `other`; the empty interval is contained in everything.
    #[inline]
    pub fn contains_interval(&self, other: &Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// Strict containment of `other` in the interior; the empty interval always qualifies.
    #[inline]
    pub fn interior_contains_interval(&self, other: &Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        self.lo < other.lo && other.hi < self.hi
    }

    /// True iff the two closed intervals share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.lo.max(other.lo) <= self.hi.min(other.hi)
    }

    /// True iff the open interior of `self` meets the closed interval `other`.
    ///
    /// A degenerate `self` (single point) has no interior and never qualifies.
    #[inline]
    pub fn interior_intersects(&self, other: &Interval) -> bool {
        if self.lo >= self.hi || other.is_empty() {
            return false;
        }
        other.lo < self.hi && self.lo < other.hi
    }

    /// Set intersection; empty (by relation) when the inputs do not overlap.
    #[inline]
    pub fn intersection(&self, other: &Interval) -> Interval {
        Interval {
            lo: self.lo.max(other.lo),
            hi: self.hi.min(other.hi),
        }
    }

    /// Minimal expansion of `self` that contains `p`.
    pub fn add_point(&self, p: f64) -> Interval {
        if self.is_empty() {
            Interval::from_point(p)
        } else if p < self.lo {
            Interval { lo: p, hi: self.hi }
        } else if p > self.hi {
            Interval { lo: self.lo, hi: p }
        } else {
            *self
        }
    }

    /// Closest point of the interval to `p`. Pre: non-empty.
    #[inline]
    pub fn clamp_point(&self, p: f64) -> f64 {
        self.lo.max(self.hi.min(p))
    }

    /// Grow both ends by `margin` (shrink if negative). Empty stays unchanged.
    ///
    /// The result may become empty; it is not normalized to `empty()`.
    #[inline]
    pub fn expanded(&self, margin: f64) -> Interval {
        if self.is_empty() {
            return *self;
        }
        Interval {
            lo: self.lo - margin,
            hi: self.hi + margin,
        }
    }

    /// Smallest interval containing both inputs.
    pub fn union(&self, other: &Interval) -> Interval {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Interval {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// `approx_equal_eps` with `DEFAULT_APPROX_EPS`.
    #[inline]
    pub fn approx_equal(&self, other: &Interval) -> bool {
        self.approx_equal_eps(other, DEFAULT_APPROX_EPS)
    }

    /// Endpoints within `eps` of each other.
    ///
    /// The empty interval has no position on the line, so it matches any interval
    /// of length at most `2 * eps` (including other empties).
    pub fn approx_equal_eps(&self, other: &Interval, eps: f64) -> bool {
        if self.is_empty() {
            return other.length() <= 2.0 * eps;
        }
        if other.is_empty() {
            return self.length() <= 2.0 * eps;
        }
        (other.lo - self.lo).abs() <= eps && (other.hi - self.hi).abs() <= eps
    }

    /// Largest distance from a point of `self` to the nearest point of `other`.
    ///
    /// 0 if `self` is empty, +∞ if only `other` is empty.
    pub fn directed_hausdorff_distance(&self, other: &Interval) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        if other.is_empty() {
            return f64::INFINITY;
        }
        0.0f64.max((self.hi - other.hi).max(other.lo - self.lo))
    }
}

impl PartialEq for Interval {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}
