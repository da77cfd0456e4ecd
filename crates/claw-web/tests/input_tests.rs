// Host-side tests for pure pointer helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_between_samples() {
    let mut drag = DragState::default();
    assert_eq!(drag.update(1, Vec2::new(5.0, 5.0)), None);
    drag.begin(1, Vec2::new(10.0, 10.0));
    assert_eq!(drag.update(1, Vec2::new(14.0, 7.0)), Some(Vec2::new(4.0, -3.0)));
    assert_eq!(drag.update(1, Vec2::new(14.0, 9.0)), Some(Vec2::new(0.0, 2.0)));
}

#[test]
fn drag_ignores_other_pointers() {
    let mut drag = DragState::default();
    drag.begin(3, Vec2::ZERO);
    assert_eq!(drag.update(4, Vec2::new(1.0, 1.0)), None);
    drag.end(4);
    assert!(drag.active);
    drag.end(3);
    assert!(!drag.active);
    assert_eq!(drag.update(3, Vec2::new(2.0, 2.0)), None);
}

#[test]
fn wheel_delta_normalises_modes() {
    assert_eq!(wheel_delta_px(10.0, 0), 10.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(1.0, 2), 800.0);
}
