//! Eased count-up for statistics counters.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::COUNTER_DURATION_MS;
use crate::easing;
use crate::tween::Tween;

/// Counts from zero to a target value with a fast-start, gentle-settle
/// curve, landing exactly on the target.
#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    tween: Tween,
}

impl CountUp {
    /// Count-up beginning at `start_ms`. Negative targets clamp to zero.
    #[must_use]
    pub fn new(target: f64, start_ms: f64) -> Self {
        Self {
            tween: Tween::with_ease(
                0.0,
                target.max(0.0),
                start_ms,
                COUNTER_DURATION_MS,
                easing::ease_out_cubic,
            ),
        }
    }

    /// Exact eased value at `now_ms`.
    #[must_use]
    pub fn value(&self, now_ms: f64) -> f64 {
        self.tween.sample(now_ms)
    }

    /// Rounded value for display.
    #[must_use]
    pub fn display(&self, now_ms: f64) -> u64 {
        self.value(now_ms).round().max(0.0) as u64
    }

    #[must_use]
    pub fn done(&self, now_ms: f64) -> bool {
        self.tween.done(now_ms)
    }
}
