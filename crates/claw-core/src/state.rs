//! Session-owned state shared by the sampler, the motion controller and the
//! grab sequencer.
//!
//! Each field has exactly one writer: the sampler writes `position.x`/`position.z`,
//! the motion controller writes `position.y`, and the sequencer writes
//! `target_height` and `movement_lock`. Renderers only read.

use glam::Vec3;

/// Claw position in table space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClawPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ClawPosition {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<ClawPosition> for Vec3 {
    fn from(p: ClawPosition) -> Self {
        p.to_vec3()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub position: ClawPosition,
    pub target_height: f32,
    /// Set while a grab sequence is in progress.
    pub movement_lock: bool,
}

impl SessionState {
    pub fn new(rest_height: f32) -> Self {
        Self {
            position: ClawPosition::new(0.0, rest_height, 0.0),
            target_height: rest_height,
            movement_lock: false,
        }
    }
}
