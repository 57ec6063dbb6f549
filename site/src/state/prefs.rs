//! Motion preferences resolved once at startup.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// Accessibility and diagnostics preferences.
///
/// `reduced_motion` routes the hero straight to the vector fallback, snaps
/// counters to their final values and disables the pulse and smoke.
/// `debug` mirrors the `?debug=1` query flag for components that want it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPrefs {
    pub reduced_motion: bool,
    pub debug: bool,
}
