#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pose_approx_eq(a: Pose, b: Pose) -> bool {
    approx_eq(a.rot_x, b.rot_x)
        && approx_eq(a.rot_y, b.rot_y)
        && approx_eq(a.offset_x, b.offset_x)
        && approx_eq(a.offset_y, b.offset_y)
}

// --- target_pose ---

#[test]
fn center_pointer_yields_rest_pose() {
    assert!(pose_approx_eq(
        target_pose(0.0, 0.0, 800.0, 400.0),
        Pose::default()
    ));
}

#[test]
fn right_edge_yields_full_yaw_and_shift() {
    let pose = target_pose(400.0, 0.0, 800.0, 400.0);
    assert!(approx_eq(pose.rot_y, PARALLAX_MAX_YAW_RAD));
    assert!(approx_eq(pose.offset_x, PARALLAX_MAX_SHIFT));
    assert!(approx_eq(pose.rot_x, 0.0));
}

#[test]
fn top_edge_tips_the_model_forward() {
    let pose = target_pose(0.0, -200.0, 800.0, 400.0);
    assert!(approx_eq(pose.rot_x, PARALLAX_MAX_PITCH_RAD));
    assert!(approx_eq(pose.offset_y, PARALLAX_MAX_SHIFT * 0.5));
}

#[test]
fn offsets_beyond_the_region_clamp_to_the_edge_pose() {
    let edge = target_pose(400.0, 200.0, 800.0, 400.0);
    let far = target_pose(10_000.0, 10_000.0, 800.0, 400.0);
    assert!(pose_approx_eq(edge, far));
}

#[test]
fn pose_scales_linearly_inside_the_region() {
    let half = target_pose(200.0, 0.0, 800.0, 400.0);
    assert!(approx_eq(half.rot_y, PARALLAX_MAX_YAW_RAD * 0.5));
}

#[test]
fn degenerate_dimensions_yield_rest_pose() {
    assert!(pose_approx_eq(
        target_pose(100.0, 100.0, 0.0, 400.0),
        Pose::default()
    ));
    assert!(pose_approx_eq(
        target_pose(100.0, 100.0, 800.0, -5.0),
        Pose::default()
    ));
}

// --- PoseTween ---

#[test]
fn new_tween_is_settled_at_rest() {
    let tween = PoseTween::new(0.0);
    assert!(pose_approx_eq(tween.sample(0.0), Pose::default()));
    assert!(pose_approx_eq(tween.sample(5000.0), Pose::default()));
}

#[test]
fn tween_reaches_its_target_after_the_window() {
    let mut tween = PoseTween::new(0.0);
    let target = target_pose(400.0, 0.0, 800.0, 400.0);
    tween.retarget(target, 1000.0);
    assert!(pose_approx_eq(tween.sample(1000.0 + PARALLAX_TWEEN_MS), target));
    assert!(pose_approx_eq(tween.target(), target));
}

#[test]
fn tween_is_partway_mid_window() {
    let mut tween = PoseTween::new(0.0);
    let target = target_pose(400.0, 0.0, 800.0, 400.0);
    tween.retarget(target, 0.0);
    let mid = tween.sample(PARALLAX_TWEEN_MS / 2.0);
    assert!(mid.rot_y > 0.0);
    assert!(mid.rot_y < target.rot_y);
}

#[test]
fn retarget_mid_flight_is_continuous() {
    let mut tween = PoseTween::new(0.0);
    tween.retarget(target_pose(400.0, 0.0, 800.0, 400.0), 0.0);
    let mid = tween.sample(300.0);
    tween.retarget(target_pose(-400.0, 0.0, 800.0, 400.0), 300.0);
    assert!(pose_approx_eq(tween.sample(300.0), mid));
}
