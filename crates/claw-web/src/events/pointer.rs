use crate::input::{self, DragState};
use claw_core::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    let PointerWiring {
        canvas,
        camera,
        drag,
    } = w;

    {
        let canvas_down = canvas.clone();
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let at = input::pointer_canvas_px(&ev, &canvas_down);
            drag.borrow_mut().begin(ev.pointer_id(), at);
            _ = canvas_down.set_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let canvas_move = canvas.clone();
        let drag = drag.clone();
        let camera = camera.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let at = input::pointer_canvas_px(&ev, &canvas_move);
            if let Some(delta) = drag.borrow_mut().update(ev.pointer_id(), at) {
                camera.borrow_mut().orbit(delta.x, delta.y);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for name in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag.borrow_mut().end(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
            camera.borrow_mut().zoom(delta);
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
