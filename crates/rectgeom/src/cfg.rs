//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants. Callers that need a different tolerance pass
//!   it explicitly through the `*_eps` variants instead of mutating global state.

/// Default slack for `approx_equal` on intervals and rectangles.
pub const DEFAULT_APPROX_EPS: f64 = 1e-14;
