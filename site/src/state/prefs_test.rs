use super::*;

#[test]
fn defaults_to_full_motion() {
    let prefs = MotionPrefs::default();
    assert!(!prefs.reduced_motion);
    assert!(!prefs.debug);
}

#[test]
fn flags_are_independent() {
    let prefs = MotionPrefs {
        reduced_motion: true,
        debug: false,
    };
    assert!(prefs.reduced_motion);
    assert!(!prefs.debug);
}
