//! Shared numeric constants.
//!
//! Tuning values live here rather than at their call sites so the visual
//! parameters of the site can be reviewed in one place.

// ── Smoke field ─────────────────────────────────────────────────────────────

/// Fewest blobs a field will ever hold, regardless of surface width.
pub const BLOB_MIN_COUNT: usize = 3;

/// Surface width, in pixels, that earns one blob.
pub const BLOB_WIDTH_PER_BLOB: f64 = 240.0;

/// How far past either horizontal edge a blob may drift before wrapping to
/// the opposite side.
pub const BLOB_WRAP_MARGIN: f64 = 200.0;

/// Smallest blob radius in pixels.
pub const BLOB_RADIUS_MIN: f64 = 40.0;

/// Largest blob radius in pixels.
pub const BLOB_RADIUS_MAX: f64 = 110.0;

/// Slowest horizontal drift, pixels per second.
pub const BLOB_SPEED_MIN: f64 = 6.0;

/// Fastest horizontal drift, pixels per second.
pub const BLOB_SPEED_MAX: f64 = 26.0;

/// Largest vertical drift in either direction, pixels per second.
pub const BLOB_VERTICAL_SPEED_MAX: f64 = 4.0;

/// Faintest blob center opacity.
pub const BLOB_OPACITY_MIN: f64 = 0.05;

/// Strongest blob center opacity.
pub const BLOB_OPACITY_MAX: f64 = 0.14;

/// Blob tint, a light blue-white, as an `r, g, b` triple for `rgba()`.
pub const SMOKE_RGB: &str = "214, 231, 244";

// ── Visibility gate ─────────────────────────────────────────────────────────

/// Fraction of a gated region that must be visible before its one-shot
/// trigger fires.
pub const VISIBILITY_THRESHOLD: f64 = 0.25;

// ── Parallax ────────────────────────────────────────────────────────────────

/// Largest yaw the pointer can induce on the model, radians.
pub const PARALLAX_MAX_YAW_RAD: f64 = 0.35;

/// Largest pitch the pointer can induce on the model, radians.
pub const PARALLAX_MAX_PITCH_RAD: f64 = 0.12;

/// Largest lateral shift the pointer can induce, scene units.
pub const PARALLAX_MAX_SHIFT: f64 = 0.4;

/// How long the model takes to settle on a new pointer target.
pub const PARALLAX_TWEEN_MS: f64 = 600.0;

// ── Counters ────────────────────────────────────────────────────────────────

/// Count-up duration from zero to the target value.
pub const COUNTER_DURATION_MS: f64 = 1400.0;

// ── Call to action ──────────────────────────────────────────────────────────

/// One full pulse cycle of the call-to-action button.
pub const PULSE_PERIOD_MS: f64 = 1600.0;

/// Peak scale gain at the top of a pulse.
pub const PULSE_AMPLITUDE: f64 = 0.05;

// ── Page transition ─────────────────────────────────────────────────────────

/// Time the veil takes to cover the page before the route swaps.
pub const VEIL_COVER_MS: u64 = 400;

/// Time the veil stays up after the route swaps.
pub const VEIL_RELEASE_MS: u64 = 350;
