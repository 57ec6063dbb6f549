use super::*;

#[test]
fn starts_fully_closed() {
    let state = UiState::default();
    assert!(!state.drawer_open);
    assert!(!state.veil_active);
}

#[test]
fn toggle_flips_the_drawer_both_ways() {
    let mut state = UiState::default();
    state.toggle_drawer();
    assert!(state.drawer_open);
    state.toggle_drawer();
    assert!(!state.drawer_open);
}

#[test]
fn close_is_idempotent() {
    let mut state = UiState::default();
    state.toggle_drawer();
    state.close_drawer();
    state.close_drawer();
    assert!(!state.drawer_open);
}

#[test]
fn drawer_and_veil_are_independent() {
    let mut state = UiState {
        veil_active: true,
        ..UiState::default()
    };
    state.toggle_drawer();
    assert!(state.veil_active);
    state.close_drawer();
    assert!(state.veil_active);
}
