#![cfg(target_arch = "wasm32")]
use claw_core::{GameSession, KeyState, OrbitCamera, SessionParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("claw-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    overlay::mount_instructions(&document, true);
    overlay::sync_prize(&document, None);

    let session = Rc::new(RefCell::new(GameSession::new(SessionParams::default())?));
    let keys = Rc::new(RefCell::new(KeyState::new()));
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    events::wire_keyboard(document.clone(), session.clone(), keys.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        drag,
    });

    // Game logic keeps running without a GPU; only drawing is skipped
    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        keys,
        camera,
        canvas,
        document,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
