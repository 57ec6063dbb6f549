#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn starts_at_rest_scale() {
    let pulse = Pulse::new(1600.0, 0.05, 500.0);
    assert!(approx_eq(pulse.scale_at(500.0), 1.0));
}

#[test]
fn peaks_at_half_period() {
    let pulse = Pulse::new(1600.0, 0.05, 0.0);
    assert!(approx_eq(pulse.scale_at(800.0), 1.05));
}

#[test]
fn returns_to_rest_after_a_full_period() {
    let pulse = Pulse::new(1600.0, 0.05, 0.0);
    assert!(approx_eq(pulse.scale_at(1600.0), 1.0));
}

#[test]
fn stays_within_amplitude_bounds() {
    let pulse = Pulse::new(1600.0, 0.05, 0.0);
    for i in 0..=320 {
        let scale = pulse.scale_at(f64::from(i) * 10.0);
        assert!((1.0..=1.05 + EPSILON).contains(&scale));
    }
}

#[test]
fn repeats_across_periods() {
    let pulse = Pulse::new(1600.0, 0.05, 0.0);
    assert!(approx_eq(pulse.scale_at(400.0), pulse.scale_at(400.0 + 1600.0)));
}

#[test]
fn zero_period_holds_rest_scale() {
    let pulse = Pulse::new(0.0, 0.05, 0.0);
    assert!(approx_eq(pulse.scale_at(1234.0), 1.0));
}
