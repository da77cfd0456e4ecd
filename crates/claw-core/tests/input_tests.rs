// Input sampler: clamping, diagonals and the no-input no-op.

use claw_core::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn intent(forward: bool, backward: bool, left: bool, right: bool) -> DirectionalIntent {
    DirectionalIntent {
        forward,
        backward,
        left,
        right,
    }
}

#[test]
fn random_input_never_leaves_the_table() {
    let sampler = InputSampler::default();
    let mut state = SessionState::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20_000 {
        let i = intent(rng.gen(), rng.gen(), rng.gen(), rng.gen());
        sampler.sample(i, &mut state);
        assert!(
            (X_MIN..=X_MAX).contains(&state.position.x),
            "x out of range: {}",
            state.position.x
        );
        assert!(
            (Z_MIN..=Z_MAX).contains(&state.position.z),
            "z out of range: {}",
            state.position.z
        );
    }
}

#[test]
fn diagonal_moves_both_axes_in_one_tick() {
    let sampler = InputSampler::default();
    let mut state = SessionState::default();
    assert!(sampler.sample(intent(true, false, true, false), &mut state));
    assert!((state.position.x - -MOVE_STEP).abs() < 1e-6);
    assert!((state.position.z - -MOVE_STEP).abs() < 1e-6);
}

#[test]
fn no_flags_leaves_position_untouched() {
    let sampler = InputSampler::default();
    let mut state = SessionState::default();
    state.position = ClawPosition::new(0.3, -0.2, -0.1);
    assert!(!sampler.sample(DirectionalIntent::NONE, &mut state));
    assert_eq!(state.position, ClawPosition::new(0.3, -0.2, -0.1));
}

#[test]
fn no_flags_does_not_clamp_out_of_range_state() {
    let sampler = InputSampler::default();
    let mut state = SessionState::default();
    state.position.x = 2.0;
    sampler.sample(DirectionalIntent::NONE, &mut state);
    assert_eq!(state.position.x, 2.0);
}

#[test]
fn opposite_flags_cancel_but_still_publish() {
    let sampler = InputSampler::default();
    let mut state = SessionState::default();
    assert!(sampler.sample(intent(true, true, true, true), &mut state));
    assert_eq!(state.position.x, 0.0);
    assert_eq!(state.position.z, 0.0);
}

#[test]
fn movement_stops_at_each_edge() {
    let sampler = InputSampler::default();
    let mut state = SessionState::default();
    for _ in 0..100 {
        sampler.sample(intent(false, true, false, true), &mut state);
    }
    assert_eq!(state.position.x, X_MAX);
    assert_eq!(state.position.z, Z_MAX);
    for _ in 0..100 {
        sampler.sample(intent(true, false, true, false), &mut state);
    }
    assert_eq!(state.position.x, X_MIN);
    assert_eq!(state.position.z, Z_MIN);
}

#[test]
fn clamp_is_applied_to_out_of_range_input() {
    let sampler = InputSampler::default();
    let (x, z) = sampler.propose(DirectionalIntent::NONE, 5.0, -5.0);
    assert_eq!(x, X_MAX);
    assert_eq!(z, Z_MIN);
}

#[test]
fn height_passes_through_unchanged() {
    let sampler = InputSampler::default();
    let mut state = SessionState::default();
    state.position.y = -0.42;
    sampler.sample(intent(false, false, false, true), &mut state);
    assert_eq!(state.position.y, -0.42);
}
