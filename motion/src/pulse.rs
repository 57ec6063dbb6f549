//! Periodic scale pulse for attention-drawing elements.

#[cfg(test)]
#[path = "pulse_test.rs"]
mod pulse_test;

use std::f64::consts::TAU;

/// Periodic scale wave: `1.0` at rest, rising to `1.0 + amplitude` and back
/// once per period. The wave starts at rest, so the first frame after
/// attaching causes no visible jump.
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    period_ms: f64,
    amplitude: f64,
    start_ms: f64,
}

impl Pulse {
    #[must_use]
    pub fn new(period_ms: f64, amplitude: f64, start_ms: f64) -> Self {
        Self {
            period_ms,
            amplitude,
            start_ms,
        }
    }

    /// Scale factor at `now_ms`. A non-positive period holds the rest scale.
    #[must_use]
    pub fn scale_at(&self, now_ms: f64) -> f64 {
        if self.period_ms <= 0.0 {
            return 1.0;
        }
        let phase = (now_ms - self.start_ms) / self.period_ms * TAU;
        1.0 + self.amplitude * 0.5 * (1.0 - phase.cos())
    }
}
