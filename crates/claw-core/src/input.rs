use crate::params::{Bounds, SessionParams};
use crate::state::SessionState;

/// Snapshot of the four directional intents for one tick. Flags combine
/// additively, so diagonals are allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionalIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalIntent {
    pub const NONE: Self = Self {
        forward: false,
        backward: false,
        left: false,
        right: false,
    };

    #[inline]
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Turns an intent snapshot into a clamped (x, z) update.
#[derive(Clone, Debug)]
pub struct InputSampler {
    step: f32,
    x_bounds: Bounds,
    z_bounds: Bounds,
}

impl InputSampler {
    pub fn new(params: &SessionParams) -> Self {
        Self {
            step: params.move_step,
            x_bounds: params.x_bounds,
            z_bounds: params.z_bounds,
        }
    }

    /// Candidate (x, z) after applying `intent` to (x, z), clamped to the table.
    /// Forward is -z, left is -x.
    pub fn propose(&self, intent: DirectionalIntent, x: f32, z: f32) -> (f32, f32) {
        let (mut x, mut z) = (x, z);
        if intent.forward {
            z -= self.step;
        }
        if intent.backward {
            z += self.step;
        }
        if intent.left {
            x -= self.step;
        }
        if intent.right {
            x += self.step;
        }
        (self.x_bounds.clamp(x), self.z_bounds.clamp(z))
    }

    /// Publish the candidate position if any intent is active. Returns whether
    /// the state was written; `y` is never touched.
    pub fn sample(&self, intent: DirectionalIntent, state: &mut SessionState) -> bool {
        let (x, z) = self.propose(intent, state.position.x, state.position.z);
        if !intent.any() {
            return false;
        }
        state.position.x = x;
        state.position.z = z;
        true
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new(&SessionParams::default())
    }
}
