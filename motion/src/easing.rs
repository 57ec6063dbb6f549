//! Easing curves shared by every animated surface.
//!
//! All curves map a progress value to `[0, 1]` with `f(0) = 0` and
//! `f(1) = 1`; out-of-range input clamps to the endpoints.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Clamp a progress value to `[0, 1]`.
#[must_use]
pub fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Smooth acceleration and deceleration: `3t^2 - 2t^3`.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = clamp01(t);
    t * t * (3.0 - 2.0 * t)
}

/// Fast start, gentle settle: `1 - (1 - t)^3`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = clamp01(t);
    1.0 - (1.0 - t).powi(3)
}
