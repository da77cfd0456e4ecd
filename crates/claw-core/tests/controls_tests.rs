// Key map and held-key tracking.

use claw_core::*;

#[test]
fn arrow_and_wasd_keys_map_to_directions() {
    for k in ["ArrowUp", "w", "W", "KeyW"] {
        assert_eq!(Control::from_key(k), Some(Control::Forward), "{}", k);
    }
    for k in ["ArrowDown", "s", "S", "KeyS"] {
        assert_eq!(Control::from_key(k), Some(Control::Backward), "{}", k);
    }
    for k in ["ArrowLeft", "a", "A", "KeyA"] {
        assert_eq!(Control::from_key(k), Some(Control::Left), "{}", k);
    }
    for k in ["ArrowRight", "d", "D", "KeyD"] {
        assert_eq!(Control::from_key(k), Some(Control::Right), "{}", k);
    }
}

#[test]
fn space_is_grab() {
    assert_eq!(Control::from_key(" "), Some(Control::Grab));
    assert_eq!(Control::from_key("Space"), Some(Control::Grab));
}

#[test]
fn unrelated_keys_are_ignored() {
    for k in ["q", "Enter", "Escape", "1", "Shift", ""] {
        assert_eq!(Control::from_key(k), None, "{}", k);
    }
    let mut keys = KeyState::new();
    assert_eq!(keys.press("q"), None);
    assert_eq!(keys.intent(), DirectionalIntent::NONE);
}

#[test]
fn h_toggles_instructions() {
    assert!(is_instructions_toggle("h"));
    assert!(is_instructions_toggle("H"));
    assert!(!is_instructions_toggle("j"));
}

#[test]
fn press_release_drives_intent() {
    let mut keys = KeyState::new();
    assert_eq!(keys.press("w"), Some(Control::Forward));
    assert_eq!(keys.press("ArrowLeft"), Some(Control::Left));
    let i = keys.intent();
    assert!(i.forward && i.left && !i.backward && !i.right);
    keys.release("w");
    let i = keys.intent();
    assert!(!i.forward && i.left);
}

#[test]
fn auto_repeat_reports_the_control_again() {
    let mut keys = KeyState::new();
    assert_eq!(keys.press(" "), Some(Control::Grab));
    assert_eq!(keys.press(" "), Some(Control::Grab));
    assert!(keys.is_held(Control::Grab));
    keys.release(" ");
    assert!(!keys.is_held(Control::Grab));
}

#[test]
fn shift_change_between_down_and_up_still_releases() {
    let mut keys = KeyState::new();
    keys.press("d");
    keys.release("D");
    assert!(!keys.intent().right);
}

#[test]
fn two_keys_for_one_direction_hold_until_both_release() {
    let mut keys = KeyState::new();
    keys.press("ArrowRight");
    keys.press("d");
    keys.release("ArrowRight");
    assert!(keys.intent().right);
    keys.release("d");
    assert!(!keys.intent().right);
}

#[test]
fn clear_drops_held_keys() {
    let mut keys = KeyState::new();
    keys.press("s");
    keys.press("a");
    keys.clear();
    assert_eq!(keys.intent(), DirectionalIntent::NONE);
    assert!(!keys.is_held(Control::Backward));
}
