// Prize popup display window.

use claw_core::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn outcome_is_visible_for_the_window_then_cleared() {
    let mut display = PrizeDisplay::default();
    assert_eq!(display.visible(), None);
    assert_eq!(display.publish(PrizeOutcome::Lollipop, ms(100)), None);
    assert_eq!(display.visible(), Some(PrizeOutcome::Lollipop));
    assert_eq!(display.advance(ms(2099)), None);
    assert_eq!(display.visible(), Some(PrizeOutcome::Lollipop));
    assert_eq!(display.advance(ms(2100)), Some(PrizeOutcome::Lollipop));
    assert_eq!(display.visible(), None);
    assert_eq!(display.expires_at(), None);
}

#[test]
fn replacement_restarts_the_window() {
    let mut display = PrizeDisplay::default();
    display.publish(PrizeOutcome::TeddyBear, ms(0));
    let replaced = display.publish(PrizeOutcome::Duckling, ms(1000));
    assert_eq!(replaced, Some(PrizeOutcome::TeddyBear));

    // first window would have ended here
    assert_eq!(display.advance(ms(2000)), None);
    assert_eq!(display.visible(), Some(PrizeOutcome::Duckling));

    assert_eq!(display.advance(ms(2999)), None);
    assert_eq!(display.advance(ms(3000)), Some(PrizeOutcome::Duckling));
    assert_eq!(display.visible(), None);
}

#[test]
fn advance_without_publish_is_a_no_op() {
    let mut display = PrizeDisplay::default();
    assert_eq!(display.advance(ms(10_000)), None);
}

#[test]
fn clear_cancels_the_pending_expiry() {
    let mut display = PrizeDisplay::new(ms(500));
    display.publish(PrizeOutcome::Fail, ms(0));
    display.clear();
    assert_eq!(display.visible(), None);
    assert_eq!(display.advance(ms(600)), None);
}

#[test]
fn timer_fires_once() {
    let mut t = Timer::idle();
    t.schedule(ms(10), ms(5));
    assert!(t.is_armed());
    assert_eq!(t.fire(ms(14)), None);
    assert_eq!(t.fire(ms(20)), Some(ms(15)));
    assert_eq!(t.fire(ms(30)), None);
    assert!(!t.is_armed());
}
