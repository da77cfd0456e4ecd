// Vertical smoothing toward the target height.

use claw_core::*;

#[test]
fn starts_settled_at_rest() {
    let motion = MotionController::default();
    assert_eq!(motion.phase(), VerticalPhase::Settled);
}

#[test]
fn descends_monotonically_then_snaps_to_target() {
    let mut motion = MotionController::default();
    let mut state = SessionState::default();
    motion.set_target(&mut state, -1.0);

    let mut prev = state.position.y;
    let mut ticks = 0;
    while motion.tick(&mut state) == VerticalPhase::Settling {
        let y = state.position.y;
        assert!(y < prev, "y must strictly decrease: {} -> {}", prev, y);
        assert!(y > -1.0 - HEIGHT_TOLERANCE, "overshoot: {}", y);
        prev = y;
        ticks += 1;
        assert!(ticks < 500, "never settled");
    }
    assert!(state.position.y < prev);
    assert_eq!(state.position.y, -1.0);
    // 0.95^n <= 0.01 first holds around n = 90
    assert!((80..=100).contains(&ticks), "ticks={}", ticks);
}

#[test]
fn settled_position_stays_pinned() {
    let mut motion = MotionController::default();
    let mut state = SessionState::default();
    motion.set_target(&mut state, -1.0);
    for _ in 0..300 {
        motion.tick(&mut state);
    }
    for _ in 0..10 {
        assert_eq!(motion.tick(&mut state), VerticalPhase::Settled);
        assert_eq!(state.position.y, -1.0);
    }
}

#[test]
fn external_target_write_rearms_settling() {
    let mut motion = MotionController::default();
    let mut state = SessionState::default();
    state.target_height = -1.0;
    assert_eq!(motion.tick(&mut state), VerticalPhase::Settling);
    assert!(state.position.y < 0.0);
}

#[test]
fn rises_back_to_rest() {
    let mut motion = MotionController::default();
    let mut state = SessionState::default();
    motion.set_target(&mut state, -1.0);
    for _ in 0..300 {
        motion.tick(&mut state);
    }
    motion.set_target(&mut state, 0.0);
    let mut prev = state.position.y;
    while motion.tick(&mut state) == VerticalPhase::Settling {
        assert!(state.position.y > prev);
        prev = state.position.y;
    }
    assert_eq!(state.position.y, 0.0);
}

#[test]
fn target_within_tolerance_snaps_on_next_tick() {
    let mut motion = MotionController::default();
    let mut state = SessionState::default();
    motion.set_target(&mut state, -0.005);
    assert_eq!(motion.tick(&mut state), VerticalPhase::Settled);
    assert_eq!(state.position.y, -0.005);
}

#[test]
fn first_step_closes_five_percent_of_the_gap() {
    let mut motion = MotionController::default();
    let mut state = SessionState::default();
    motion.set_target(&mut state, -1.0);
    motion.tick(&mut state);
    assert!((state.position.y - -0.05).abs() < 1e-6);
}

#[test]
fn horizontal_axes_are_not_touched() {
    let mut motion = MotionController::default();
    let mut state = SessionState::default();
    state.position.x = 0.25;
    state.position.z = -0.5;
    motion.set_target(&mut state, -1.0);
    for _ in 0..50 {
        motion.tick(&mut state);
    }
    assert_eq!(state.position.x, 0.25);
    assert_eq!(state.position.z, -0.5);
}
