// Tuning constants and their relationships.

use claw_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn table_bounds_are_ordered() {
    assert!(X_MIN < X_MAX);
    assert!(Z_MIN < Z_MAX);
    assert!(X_MIN <= 0.0 && 0.0 <= X_MAX);
    assert!(Z_MIN <= 0.0 && 0.0 <= Z_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_guarantees_convergence() {
    assert!(HEIGHT_SMOOTHING > 0.0 && HEIGHT_SMOOTHING < 1.0);
    assert!(HEIGHT_TOLERANCE > 0.0);
    assert!(GRAB_HEIGHT < REST_HEIGHT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn prize_thresholds_ascend_within_unit_interval() {
    assert!(0.0 < FAIL_BELOW);
    assert!(FAIL_BELOW < TEDDY_BELOW);
    assert!(TEDDY_BELOW < LOLLIPOP_BELOW);
    assert!(LOLLIPOP_BELOW < 1.0);
}

#[test]
fn durations_match_the_sequence() {
    assert_eq!(descend_duration().as_millis(), 1500);
    assert_eq!(ascend_duration().as_millis(), 1500);
    assert_eq!(prize_display_duration().as_millis(), 2000);
}

#[test]
fn default_params_validate() {
    let p = SessionParams::default();
    assert_eq!(p.validate(), Ok(()));
    assert_eq!(p.x_bounds, Bounds::new(X_MIN, X_MAX));
    assert!(!p.lock_movement_during_grab);
    assert_eq!(p.seed, None);
}

#[test]
fn params_reject_bad_values() {
    let mut p = SessionParams::default();
    p.move_step = 0.0;
    assert_eq!(p.validate(), Err(ParamsError::Step(0.0)));

    let mut p = SessionParams::default();
    p.height_tolerance = f32::NAN;
    assert!(matches!(p.validate(), Err(ParamsError::Tolerance(_))));

    let mut p = SessionParams::default();
    p.grab_height = f32::INFINITY;
    assert!(matches!(p.validate(), Err(ParamsError::Height(_))));

    let mut p = SessionParams::default();
    p.z_bounds = Bounds::new(f32::NAN, 0.4);
    assert!(matches!(
        p.validate(),
        Err(ParamsError::Bounds { axis: "z", .. })
    ));
}

#[test]
fn bounds_clamp_and_contain() {
    let b = Bounds::new(-0.7, 0.4);
    assert_eq!(b.clamp(1.0), 0.4);
    assert_eq!(b.clamp(-1.0), -0.7);
    assert!(b.contains(0.0));
    assert!(!b.contains(0.41));
}
