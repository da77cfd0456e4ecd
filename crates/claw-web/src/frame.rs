use crate::camera;
use crate::overlay;
use crate::render;
use claw_core::{build_instances, GameSession, KeyState, OrbitCamera, SessionEvent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<GameSession>>,
    pub keys: Rc<RefCell<KeyState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,

    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let intent = self.keys.borrow().intent();
        let (events, visible, position) = {
            let mut session = self.session.borrow_mut();
            let events = session.tick(dt, intent);
            (events, session.visible_prize(), session.position())
        };

        let mut popup_dirty = false;
        for ev in &events {
            match ev {
                SessionEvent::ClawRaising => log::debug!("[grab] raising"),
                SessionEvent::GrabResolved(_) | SessionEvent::PrizeExpired(_) => {
                    popup_dirty = true
                }
                SessionEvent::GrabStarted => {}
            }
        }
        if popup_dirty {
            overlay::sync_prize(&self.document, visible);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let uniforms = camera::scene_uniforms(&self.camera.borrow(), &self.canvas);
            let instances = build_instances(position);
            if let Err(e) = g.render(&instances, &uniforms) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
