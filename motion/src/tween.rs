//! Time-boxed scalar tween.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use crate::easing;

/// A scalar animated from `from` to `to` over a fixed duration.
///
/// Timestamps are milliseconds on the caller's clock, typically the
/// animation-frame timestamp. Sampling is pure: the same `now_ms` always
/// yields the same value, so a tween can be shared and re-sampled freely.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    ease: fn(f64) -> f64,
}

impl Tween {
    /// Tween with smooth in-out easing.
    #[must_use]
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self::with_ease(from, to, start_ms, duration_ms, easing::ease_in_out)
    }

    /// Tween with an explicit easing curve.
    #[must_use]
    pub fn with_ease(
        from: f64,
        to: f64,
        start_ms: f64,
        duration_ms: f64,
        ease: fn(f64) -> f64,
    ) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            ease,
        }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Raw progress in `[0, 1]` at `now_ms`. A non-positive duration is
    /// complete immediately.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        easing::clamp01((now_ms - self.start_ms) / self.duration_ms)
    }

    /// Eased value at `now_ms`, pinned to the endpoints outside the window.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> f64 {
        let eased = (self.ease)(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Whether the tween has reached its target.
    #[must_use]
    pub fn done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Re-aim at a new target from the currently sampled value, so motion
    /// stays continuous across retargets.
    pub fn retarget(&mut self, to: f64, now_ms: f64) {
        self.from = self.sample(now_ms);
        self.to = to;
        self.start_ms = now_ms;
    }
}
