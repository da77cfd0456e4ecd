use crate::overlay;
use claw_core::{is_instructions_toggle, Control, GameSession, KeyState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Prefer the layout-independent `code` when it is bound, else the `key` value.
#[inline]
fn control_name(ev: &web::KeyboardEvent) -> String {
    let code = ev.code();
    if Control::from_key(&code).is_some() {
        code
    } else {
        ev.key()
    }
}

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    session: &Rc<RefCell<GameSession>>,
    keys: &Rc<RefCell<KeyState>>,
    document: &web::Document,
) {
    if is_instructions_toggle(&ev.key()) {
        if !ev.repeat() {
            overlay::toggle_instructions(document);
        }
        return;
    }
    let name = control_name(ev);
    if Control::from_key(&name).is_none() {
        return;
    }
    // arrows and space would otherwise scroll the page
    ev.prevent_default();
    // auto-repeat included; the session lock rejects grabs already running
    let control = keys.borrow_mut().press(&name);
    if control == Some(Control::Grab) {
        if session.borrow_mut().grab().is_some() {
            log::info!("[keys] grab");
        } else {
            log::debug!("[keys] grab ignored while claw is busy");
        }
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, keys: &Rc<RefCell<KeyState>>) {
    keys.borrow_mut().release(&control_name(ev));
}

pub fn wire_keyboard(
    document: web::Document,
    session: Rc<RefCell<GameSession>>,
    keys: Rc<RefCell<KeyState>>,
) {
    let Some(window) = web::window() else {
        return;
    };

    let keys_down = keys.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &session, &keys_down, &document);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let keys_up = keys.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &keys_up);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // keyups are lost while the page is unfocused
    let blur = Closure::wrap(Box::new(move || {
        keys.borrow_mut().clear();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
