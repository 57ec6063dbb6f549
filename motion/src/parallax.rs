//! Pointer-driven parallax pose for the hero model.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::consts::{
    PARALLAX_MAX_PITCH_RAD, PARALLAX_MAX_SHIFT, PARALLAX_MAX_YAW_RAD, PARALLAX_TWEEN_MS,
};
use crate::easing;

/// Rotation and translation for the model, relative to its rest pose.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Pitch around the x axis, radians.
    pub rot_x: f64,
    /// Yaw around the y axis, radians.
    pub rot_y: f64,
    /// Lateral shift, scene units.
    pub offset_x: f64,
    /// Vertical shift, scene units.
    pub offset_y: f64,
}

impl Pose {
    fn lerp(from: Self, to: Self, t: f64) -> Self {
        Self {
            rot_x: from.rot_x + (to.rot_x - from.rot_x) * t,
            rot_y: from.rot_y + (to.rot_y - from.rot_y) * t,
            offset_x: from.offset_x + (to.offset_x - from.offset_x) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
        }
    }
}

/// Map a pointer offset from the region center into a bounded pose.
///
/// `offset_x` / `offset_y` are pixels from the center; `width` / `height`
/// are the region dimensions. Offsets beyond the region edge clamp, so the
/// pose never exceeds the configured maxima. Degenerate dimensions yield
/// the rest pose.
#[must_use]
pub fn target_pose(offset_x: f64, offset_y: f64, width: f64, height: f64) -> Pose {
    if width <= 0.0 || height <= 0.0 {
        return Pose::default();
    }
    let nx = (offset_x / (width / 2.0)).clamp(-1.0, 1.0);
    let ny = (offset_y / (height / 2.0)).clamp(-1.0, 1.0);
    Pose {
        // Pointer above center tips the model toward the viewer.
        rot_x: -ny * PARALLAX_MAX_PITCH_RAD,
        rot_y: nx * PARALLAX_MAX_YAW_RAD,
        offset_x: nx * PARALLAX_MAX_SHIFT,
        offset_y: -ny * PARALLAX_MAX_SHIFT * 0.5,
    }
}

/// Smoothly approaches a target pose over [`PARALLAX_TWEEN_MS`].
///
/// Retargeting re-aims from the currently sampled pose, so rapid pointer
/// movement never causes a visible jump.
#[derive(Debug, Clone, Copy)]
pub struct PoseTween {
    from: Pose,
    to: Pose,
    start_ms: f64,
}

impl PoseTween {
    /// Tween at rest, already settled on the rest pose.
    #[must_use]
    pub fn new(start_ms: f64) -> Self {
        Self {
            from: Pose::default(),
            to: Pose::default(),
            start_ms,
        }
    }

    #[must_use]
    pub fn target(&self) -> Pose {
        self.to
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> Pose {
        let t = easing::ease_in_out((now_ms - self.start_ms) / PARALLAX_TWEEN_MS);
        Pose::lerp(self.from, self.to, t)
    }

    /// Re-aim at `to` from the pose currently on screen.
    pub fn retarget(&mut self, to: Pose, now_ms: f64) {
        self.from = self.sample(now_ms);
        self.to = to;
        self.start_ms = now_ms;
    }
}
