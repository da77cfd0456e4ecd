//! Orbit camera shared by the web and native frontends.
//!
//! Pointer drags orbit around a fixed target and the wheel changes the
//! distance. The default pose looks down -Z from five units away, which frames
//! the whole cabinet.

use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FOVY, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, ORBIT_RADIANS_PER_PX,
};
use glam::{Mat4, Vec3};

// Keep a little margin from the poles so look_at never sees eye-up alignment.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;
const ZOOM_PER_WHEEL_UNIT: f32 = 0.001;

/// Right-handed orbit camera with perspective projection.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE,
            fovy_radians: CAMERA_FOVY,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    /// Orbit by a pointer delta in pixels.
    pub fn orbit(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw -= dx_px * ORBIT_RADIANS_PER_PX;
        self.pitch = (self.pitch + dy_px * ORBIT_RADIANS_PER_PX).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive `wheel_delta` moves away, negative moves closer.
    pub fn zoom(&mut self, wheel_delta: f32) {
        let factor = 1.0 + wheel_delta * ZOOM_PER_WHEEL_UNIT;
        self.distance =
            (self.distance * factor.max(0.1)).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
