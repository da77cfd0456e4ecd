mod render;

use std::time::Instant;

use claw_core::{
    build_instances, is_instructions_toggle, Control, GameSession, KeyState, OrbitCamera,
    PrizeOutcome, SceneUniforms, SessionEvent, SessionParams,
};
use glam::Vec2;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use render::GpuState;

const TITLE: &str = "Claw Machine";
// Pixels per wheel line, matching browsers' DOM_DELTA_LINE scaling
const WHEEL_LINE_PX: f32 = 100.0;

/// Map a winit logical key to the DOM-style key names `KeyState` understands.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Named(NamedKey::Space) => Some(" "),
        Key::Character(s) => Some(s.as_str()),
        _ => None,
    }
}

fn window_title(prize: Option<PrizeOutcome>) -> String {
    match prize {
        Some(outcome) => format!("{TITLE} | {outcome}"),
        None => TITLE.to_string(),
    }
}

#[derive(Default)]
struct Drag {
    active: bool,
    last: Option<Vec2>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut session = GameSession::new(SessionParams::default())?;
    let mut keys = KeyState::new();
    let mut camera = OrbitCamera::default();
    let mut drag = Drag::default();
    let mut shown_prize: Option<PrizeOutcome> = None;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new().with_title(TITLE).build(&event_loop)?;
    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut last_frame = Instant::now();
    log::info!("[grab] session ready: {:?}", session);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Focused(false) => keys.clear(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key, state, ..
                    },
                ..
            } => {
                let Some(name) = key_name(&logical_key) else {
                    return;
                };
                match state {
                    ElementState::Pressed => {
                        if is_instructions_toggle(name) {
                            log::info!("[keys] W/A/S/D or arrows move the claw, Space grabs");
                            return;
                        }
                        if keys.press(name) == Some(Control::Grab) {
                            match session.grab() {
                                Some(SessionEvent::GrabStarted) => {
                                    log::info!("[grab] started at {:?}", session.position())
                                }
                                _ => log::debug!("[grab] ignored, claw busy"),
                            }
                        }
                    }
                    ElementState::Released => keys.release(name),
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                drag.active = state == ElementState::Pressed;
                if !drag.active {
                    drag.last = None;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = Vec2::new(position.x as f32, position.y as f32);
                if drag.active {
                    if let Some(last) = drag.last {
                        let d = p - last;
                        camera.orbit(d.x, d.y);
                    }
                }
                drag.last = Some(p);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                camera.zoom(px);
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = now - last_frame;
            last_frame = now;

            for ev in session.tick(dt, keys.intent()) {
                match ev {
                    SessionEvent::ClawRaising => log::debug!("[grab] raising"),
                    SessionEvent::PrizeExpired(outcome) => {
                        log::debug!("[prize] {} hidden", outcome.label())
                    }
                    _ => {}
                }
            }
            let prize = session.visible_prize();
            if prize != shown_prize {
                shown_prize = prize;
                gpu.window.set_title(&window_title(prize));
            }

            let instances = build_instances(session.position());
            let uniforms = SceneUniforms::new(camera.view_proj(gpu.aspect()));
            match gpu.render(&instances, &uniforms) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
