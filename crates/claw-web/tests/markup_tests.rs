// Host-side tests for the overlay markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use claw_core::PrizeOutcome;
use markup::*;

#[test]
fn glyph_and_body_follow_open_state() {
    assert_eq!(toggle_glyph(true), "▲");
    assert_eq!(toggle_glyph(false), "▼");
    assert_eq!(body_style(true), "");
    assert_eq!(body_style(false), "display:none");
}

#[test]
fn instructions_list_controls_and_prizes() {
    let html = instructions_html(true);
    assert!(html.contains(INSTRUCTIONS_TITLE));
    assert!(html.contains("W/A/S/D"));
    assert!(html.contains("Space"));
    assert!(html.contains("🧸🍭🦆"));
    assert_eq!(html.matches("<li>").count(), 3);
    assert!(html.contains(&format!("id=\"{}\"", INSTRUCTIONS_TOGGLE_ID)));
    assert!(html.contains("▲"));
}

#[test]
fn collapsed_instructions_hide_the_body() {
    let html = instructions_html(false);
    assert!(html.contains("style=\"display:none\""));
    assert!(html.contains("▼"));
}

#[test]
fn prize_strip_lists_the_three_prizes_in_order() {
    assert_eq!(prize_strip(), "🧸🍭🦆");
}

#[test]
fn popup_shows_icon_and_label() {
    let html = popup_html(PrizeOutcome::Duckling);
    assert!(html.contains("🦆"));
    assert!(html.contains("小鴨鴨"));
    assert!(html.contains("popup-card win"));

    let miss = popup_html(PrizeOutcome::Fail);
    assert!(miss.contains("💦"));
    assert!(miss.contains("沒抓到"));
    assert!(!miss.contains(" win"));
}
