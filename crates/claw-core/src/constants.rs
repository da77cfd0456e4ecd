use glam::Vec3;
use std::time::Duration;

// Shared gameplay and scene tuning constants used by both web and native frontends.

// Table bounds (claw space)
pub const X_MIN: f32 = -0.7;
pub const X_MAX: f32 = 0.7;
pub const Z_MIN: f32 = -0.7;
pub const Z_MAX: f32 = 0.4;

// Horizontal motion
pub const MOVE_STEP: f32 = 0.05; // per active intent, per tick

// Vertical smoothing
pub const HEIGHT_SMOOTHING: f32 = 0.05; // fraction of the remaining gap closed per tick
pub const HEIGHT_TOLERANCE: f32 = 0.01; // snap band around the target

// Grab sequence
pub const REST_HEIGHT: f32 = 0.0;
pub const GRAB_HEIGHT: f32 = -1.0;
pub const DESCEND_MS: u64 = 1500;
pub const ASCEND_MS: u64 = 1500;

// Prize popup
pub const PRIZE_DISPLAY_MS: u64 = 2000;

// Prize roll thresholds on r in [0, 1)
pub const FAIL_BELOW: f64 = 0.40;
pub const TEDDY_BELOW: f64 = 0.60;
pub const LOLLIPOP_BELOW: f64 = 0.80;

// Scene layout
pub const RAIL_HEIGHT: f32 = 2.85; // claw base and track sit on the rail
pub const MODEL_SCALE: f32 = 1.3;
pub const MODEL_OFFSET: [f32; 3] = [0.1, -2.5, -1.0]; // group translation for the claw model

// Camera
pub const CAMERA_DISTANCE: f32 = 5.0;
pub const CAMERA_MIN_DISTANCE: f32 = 2.0;
pub const CAMERA_MAX_DISTANCE: f32 = 12.0;
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;

#[inline]
pub fn model_offset_vec3() -> Vec3 {
    Vec3::new(MODEL_OFFSET[0], MODEL_OFFSET[1], MODEL_OFFSET[2])
}

#[inline]
pub fn descend_duration() -> Duration {
    Duration::from_millis(DESCEND_MS)
}

#[inline]
pub fn ascend_duration() -> Duration {
    Duration::from_millis(ASCEND_MS)
}

#[inline]
pub fn prize_display_duration() -> Duration {
    Duration::from_millis(PRIZE_DISPLAY_MS)
}
