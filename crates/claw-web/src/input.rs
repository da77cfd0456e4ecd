use glam::Vec2;
use web_sys as web;

/// Pointer drag used to orbit the camera.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_px: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_px = at;
    }

    /// Delta since the previous sample, or `None` when not dragging with this pointer.
    pub fn update(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last_px;
        self.last_px = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

/// Normalise a wheel delta to pixels regardless of the event's delta mode.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    match delta_mode {
        1 => (delta_y * 16.0) as f32,  // lines
        2 => (delta_y * 800.0) as f32, // pages
        _ => delta_y as f32,
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}
