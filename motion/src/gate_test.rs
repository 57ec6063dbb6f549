#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn new_gate_is_armed() {
    let gate = OnceGate::new(0.25);
    assert_eq!(gate.state(), GateState::Armed);
    assert_eq!(gate.threshold(), 0.25);
}

#[test]
fn stays_armed_below_the_threshold() {
    let mut gate = OnceGate::new(0.25);
    assert!(!gate.observe(0.0));
    assert!(!gate.observe(0.1));
    assert!(!gate.observe(0.249));
    assert_eq!(gate.state(), GateState::Armed);
}

#[test]
fn fires_exactly_at_the_threshold() {
    let mut gate = OnceGate::new(0.25);
    assert!(gate.observe(0.25));
    assert_eq!(gate.state(), GateState::Fired);
}

#[test]
fn fires_only_once() {
    let mut gate = OnceGate::new(0.25);
    assert!(gate.observe(0.9));
    assert!(!gate.observe(1.0));
    assert!(!gate.observe(0.9));
}

#[test]
fn leaving_and_reentering_cannot_refire() {
    let mut gate = OnceGate::new(0.25);
    assert!(gate.observe(0.5));
    // Scrolled away, then back in.
    assert!(!gate.observe(0.0));
    assert!(!gate.observe(0.5));
    assert_eq!(gate.state(), GateState::Fired);
}

#[test]
fn zero_threshold_fires_on_any_observation() {
    let mut gate = OnceGate::new(0.0);
    assert!(gate.observe(0.0));
}

#[test]
fn out_of_range_threshold_clamps() {
    let gate = OnceGate::new(4.0);
    assert_eq!(gate.threshold(), 1.0);
    let gate = OnceGate::new(-1.0);
    assert_eq!(gate.threshold(), 0.0);
}
