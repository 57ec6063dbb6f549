#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::COUNTER_DURATION_MS;

#[test]
fn starts_at_zero() {
    let count = CountUp::new(250.0, 1000.0);
    assert_eq!(count.display(1000.0), 0);
}

#[test]
fn lands_exactly_on_the_target() {
    let count = CountUp::new(250.0, 1000.0);
    let end = 1000.0 + COUNTER_DURATION_MS;
    assert_eq!(count.display(end), 250);
    assert!(count.done(end));
}

#[test]
fn holds_the_target_after_completion() {
    let count = CountUp::new(98.0, 0.0);
    assert_eq!(count.display(COUNTER_DURATION_MS * 10.0), 98);
}

#[test]
fn is_monotonically_non_decreasing() {
    let count = CountUp::new(500.0, 0.0);
    let mut prev = count.value(0.0);
    for i in 1..=140 {
        let next = count.value(f64::from(i) * 10.0);
        assert!(next >= prev);
        prev = next;
    }
}

#[test]
fn front_loads_progress() {
    // Settling curve: past half the target well before half the time.
    let count = CountUp::new(100.0, 0.0);
    assert!(count.value(COUNTER_DURATION_MS / 2.0) > 50.0);
}

#[test]
fn not_done_before_the_window_closes() {
    let count = CountUp::new(10.0, 0.0);
    assert!(!count.done(COUNTER_DURATION_MS - 1.0));
}

#[test]
fn negative_target_clamps_to_zero() {
    let count = CountUp::new(-42.0, 0.0);
    assert_eq!(count.display(COUNTER_DURATION_MS), 0);
}
