//! Smoke particle field: soft drifting blobs behind the hero viewer.

#[cfg(test)]
#[path = "smoke_test.rs"]
mod smoke_test;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::consts::{
    BLOB_MIN_COUNT, BLOB_OPACITY_MAX, BLOB_OPACITY_MIN, BLOB_RADIUS_MAX, BLOB_RADIUS_MIN,
    BLOB_SPEED_MAX, BLOB_SPEED_MIN, BLOB_VERTICAL_SPEED_MAX, BLOB_WIDTH_PER_BLOB,
    BLOB_WRAP_MARGIN,
};

/// One soft-gradient particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Horizontal velocity in pixels per second, either direction.
    pub vx: f64,
    /// Vertical velocity in pixels per second. Small and never wrapped.
    pub vy: f64,
    /// Center opacity of the blob's gradient.
    pub opacity: f64,
}

/// The full particle field for one canvas.
///
/// Width and height are draw bounds in canvas pixels. [`SmokeField::resize`]
/// updates the bounds without touching existing blobs; only future wrapping
/// and drawing see the new dimensions.
#[derive(Debug, Clone)]
pub struct SmokeField {
    blobs: Vec<Blob>,
    width: f64,
    height: f64,
}

impl SmokeField {
    /// Spawn a field sized for `width` x `height`. The same seed reproduces
    /// the same field.
    #[must_use]
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let count = Self::blob_count(width);
        let mut blobs = Vec::with_capacity(count);
        for _ in 0..count {
            blobs.push(Self::spawn(&mut rng, width, height));
        }
        Self {
            blobs,
            width,
            height,
        }
    }

    /// Blob count for a surface width: one per [`BLOB_WIDTH_PER_BLOB`]
    /// pixels, never fewer than [`BLOB_MIN_COUNT`].
    #[must_use]
    pub fn blob_count(width: f64) -> usize {
        let proportional = (width.max(0.0) / BLOB_WIDTH_PER_BLOB).floor() as usize;
        proportional.max(BLOB_MIN_COUNT)
    }

    fn spawn(rng: &mut SmallRng, width: f64, height: f64) -> Blob {
        let speed = rng.random_range(BLOB_SPEED_MIN..=BLOB_SPEED_MAX);
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Blob {
            x: rng.random_range(0.0..=width.max(1.0)),
            y: rng.random_range(0.0..=height.max(1.0)),
            radius: rng.random_range(BLOB_RADIUS_MIN..=BLOB_RADIUS_MAX),
            vx: speed * direction,
            vy: rng.random_range(-BLOB_VERTICAL_SPEED_MAX..=BLOB_VERTICAL_SPEED_MAX),
            opacity: rng.random_range(BLOB_OPACITY_MIN..=BLOB_OPACITY_MAX),
        }
    }

    /// Advance every blob by `dt_ms` and wrap horizontal drift.
    ///
    /// A blob further than [`BLOB_WRAP_MARGIN`] past the right edge re-enters
    /// at the same margin past the left edge, and symmetrically. Vertical
    /// drift is slow enough that it never needs wrapping.
    pub fn step(&mut self, dt_ms: f64) {
        let dt_s = dt_ms.max(0.0) / 1000.0;
        for blob in &mut self.blobs {
            blob.x += blob.vx * dt_s;
            blob.y += blob.vy * dt_s;
            if blob.x > self.width + BLOB_WRAP_MARGIN {
                blob.x = -BLOB_WRAP_MARGIN;
            } else if blob.x < -BLOB_WRAP_MARGIN {
                blob.x = self.width + BLOB_WRAP_MARGIN;
            }
        }
    }

    /// Update draw bounds after the surface changes size. Existing blobs
    /// keep their positions and drift into the new bounds naturally.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
