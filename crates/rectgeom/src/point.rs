//! 2D points and displacement vectors.
//!
//! `Point` is a plain `nalgebra::Vector2<f64>`; the functions below name the
//! handful of operations the interval/rectangle layer relies on so that call
//! sites read the same whether they use operators or helpers.

use nalgebra::Vector2;

/// A location or displacement in R².
pub type Point = Vector2<f64>;

#[inline]
pub fn add(a: Point, b: Point) -> Point {
    a + b
}

#[inline]
pub fn sub(a: Point, b: Point) -> Point {
    a - b
}

#[inline]
pub fn mul(p: Point, s: f64) -> Point {
    p * s
}

/// 90° counterclockwise rotation `(x, y) ↦ (-y, x)`; preserves the norm.
#[inline]
pub fn ortho(p: Point) -> Point {
    Point::new(-p.y, p.x)
}

#[inline]
pub fn dot(a: Point, b: Point) -> f64 {
    a.dot(&b)
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn norm(p: Point) -> f64 {
    p.norm()
}

/// Unit vector in the direction of `p`; the zero vector is returned unchanged.
///
/// Unlike `Vector2::normalize`, this never divides by zero.
#[inline]
pub fn normalize(p: Point) -> Point {
    if p.x == 0.0 && p.y == 0.0 {
        return p;
    }
    p * (1.0 / p.norm())
}
