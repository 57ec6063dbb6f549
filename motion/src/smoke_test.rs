#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- blob_count ---

#[test]
fn blob_count_has_a_floor_of_three() {
    assert_eq!(SmokeField::blob_count(0.0), 3);
    assert_eq!(SmokeField::blob_count(100.0), 3);
    assert_eq!(SmokeField::blob_count(719.0), 3);
}

#[test]
fn blob_count_grows_with_width() {
    assert_eq!(SmokeField::blob_count(960.0), 4);
    assert_eq!(SmokeField::blob_count(2400.0), 10);
}

#[test]
fn blob_count_ignores_negative_width() {
    assert_eq!(SmokeField::blob_count(-50.0), 3);
}

// --- spawning ---

#[test]
fn new_spawns_the_count_for_its_width() {
    let field = SmokeField::new(1200.0, 400.0, 7);
    assert_eq!(field.blobs().len(), SmokeField::blob_count(1200.0));
}

#[test]
fn narrow_surfaces_still_get_three_blobs() {
    let field = SmokeField::new(320.0, 480.0, 7);
    assert_eq!(field.blobs().len(), 3);
}

#[test]
fn spawned_blobs_stay_within_configured_ranges() {
    let field = SmokeField::new(1200.0, 400.0, 42);
    for blob in field.blobs() {
        assert!((0.0..=1200.0).contains(&blob.x));
        assert!((0.0..=400.0).contains(&blob.y));
        assert!((BLOB_RADIUS_MIN..=BLOB_RADIUS_MAX).contains(&blob.radius));
        assert!((BLOB_SPEED_MIN..=BLOB_SPEED_MAX).contains(&blob.vx.abs()));
        assert!(blob.vy.abs() <= BLOB_VERTICAL_SPEED_MAX);
        assert!((BLOB_OPACITY_MIN..=BLOB_OPACITY_MAX).contains(&blob.opacity));
    }
}

#[test]
fn same_seed_reproduces_the_field() {
    let a = SmokeField::new(900.0, 300.0, 5);
    let b = SmokeField::new(900.0, 300.0, 5);
    assert_eq!(a.blobs(), b.blobs());
}

#[test]
fn different_seeds_produce_different_fields() {
    let a = SmokeField::new(900.0, 300.0, 5);
    let b = SmokeField::new(900.0, 300.0, 6);
    assert_ne!(a.blobs(), b.blobs());
}

// --- step ---

#[test]
fn step_advances_by_velocity_over_time() {
    let mut field = SmokeField::new(800.0, 300.0, 1);
    let before = field.blobs()[0];
    field.step(1000.0);
    let after = field.blobs()[0];
    assert!(approx_eq(after.x, before.x + before.vx));
    assert!(approx_eq(after.y, before.y + before.vy));
}

#[test]
fn step_scales_with_frame_time() {
    let mut field = SmokeField::new(800.0, 300.0, 1);
    let before = field.blobs()[0];
    field.step(16.0);
    let after = field.blobs()[0];
    assert!(approx_eq(after.x, before.x + before.vx * 0.016));
}

#[test]
fn zero_dt_moves_nothing() {
    let mut field = SmokeField::new(800.0, 300.0, 2);
    let before = field.blobs().to_vec();
    field.step(0.0);
    assert_eq!(field.blobs(), &before[..]);
}

#[test]
fn negative_dt_moves_nothing() {
    let mut field = SmokeField::new(800.0, 300.0, 2);
    let before = field.blobs().to_vec();
    field.step(-500.0);
    assert_eq!(field.blobs(), &before[..]);
}

// --- wrapping ---

#[test]
fn blob_past_the_right_margin_wraps_to_the_left_margin() {
    let mut field = SmokeField::new(800.0, 300.0, 3);
    field.blobs[0].x = 800.0 + BLOB_WRAP_MARGIN + 1.0;
    field.step(0.0);
    assert!(approx_eq(field.blobs()[0].x, -BLOB_WRAP_MARGIN));
}

#[test]
fn blob_past_the_left_margin_wraps_to_the_right_margin() {
    let mut field = SmokeField::new(800.0, 300.0, 3);
    field.blobs[0].x = -BLOB_WRAP_MARGIN - 1.0;
    field.step(0.0);
    assert!(approx_eq(field.blobs()[0].x, 800.0 + BLOB_WRAP_MARGIN));
}

#[test]
fn blob_exactly_at_the_margin_does_not_wrap() {
    let mut field = SmokeField::new(800.0, 300.0, 3);
    field.blobs[0].x = 800.0 + BLOB_WRAP_MARGIN;
    field.step(0.0);
    assert!(approx_eq(field.blobs()[0].x, 800.0 + BLOB_WRAP_MARGIN));
}

#[test]
fn vertical_drift_never_wraps() {
    let mut field = SmokeField::new(800.0, 300.0, 3);
    field.blobs[0].y = 10_000.0;
    field.step(0.0);
    assert!(approx_eq(field.blobs()[0].y, 10_000.0));
}

// --- resize ---

#[test]
fn resize_updates_bounds_without_touching_blobs() {
    let mut field = SmokeField::new(800.0, 300.0, 9);
    let before = field.blobs().to_vec();
    field.resize(1400.0, 500.0);
    assert_eq!(field.width(), 1400.0);
    assert_eq!(field.height(), 500.0);
    assert_eq!(field.blobs(), &before[..]);
}

#[test]
fn wrapping_uses_the_bounds_in_effect_at_step_time() {
    let mut field = SmokeField::new(800.0, 300.0, 9);
    field.resize(1400.0, 500.0);
    // Past the old right margin but inside the new one: no wrap.
    field.blobs[0].x = 800.0 + BLOB_WRAP_MARGIN + 1.0;
    field.step(0.0);
    assert!(approx_eq(field.blobs()[0].x, 800.0 + BLOB_WRAP_MARGIN + 1.0));
    // Past the new right margin: wraps.
    field.blobs[0].x = 1400.0 + BLOB_WRAP_MARGIN + 1.0;
    field.step(0.0);
    assert!(approx_eq(field.blobs()[0].x, -BLOB_WRAP_MARGIN));
}
