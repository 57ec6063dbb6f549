//! One-shot visibility trigger.
//!
//! Models a region's enter-viewport trigger as a two-state machine so
//! single-fire behavior holds without a real viewport: the gate arms once,
//! fires on the first observation at or above its threshold, and ignores
//! everything afterwards. Scrolling away and back cannot re-fire it.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// Gate lifecycle. The only legal transition is `Armed` to `Fired`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Armed,
    Fired,
}

/// One-shot trigger keyed on a visibility ratio threshold.
#[derive(Debug, Clone)]
pub struct OnceGate {
    state: GateState,
    threshold: f64,
}

impl OnceGate {
    /// Gate that fires at `threshold` visibility, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            state: GateState::Armed,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed one observed visibility ratio. Returns `true` exactly once, on
    /// the observation that first meets the threshold.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state == GateState::Fired {
            return false;
        }
        if ratio >= self.threshold {
            self.state = GateState::Fired;
            return true;
        }
        false
    }
}
