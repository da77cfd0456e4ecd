use claw_core::{OrbitCamera, SceneUniforms};
use web_sys as web;

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}

/// Uniforms for the current camera pose and canvas size.
#[inline]
pub fn scene_uniforms(camera: &OrbitCamera, canvas: &web::HtmlCanvasElement) -> SceneUniforms {
    SceneUniforms::new(camera.view_proj(canvas_aspect(canvas)))
}
