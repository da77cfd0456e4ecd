use crate::params::SessionParams;
use crate::state::SessionState;

/// Vertical axis state relative to `target_height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalPhase {
    Settling,
    /// `position.y` is pinned exactly to the target it settled on.
    Settled,
}

/// Drives `position.y` toward `target_height` by exponential smoothing.
///
/// The step is per tick, not per second, so the approach speed follows the
/// display refresh rate.
#[derive(Clone, Debug)]
pub struct MotionController {
    smoothing: f32,
    tolerance: f32,
    phase: VerticalPhase,
    settled_on: f32,
}

impl MotionController {
    pub fn new(params: &SessionParams) -> Self {
        Self {
            smoothing: params.height_smoothing,
            tolerance: params.height_tolerance,
            phase: VerticalPhase::Settled,
            settled_on: params.rest_height,
        }
    }

    #[inline]
    pub fn phase(&self) -> VerticalPhase {
        self.phase
    }

    /// Convenience for driving the controller directly. Inside a session the
    /// sequencer writes `state.target_height` and `tick` notices the change.
    pub fn set_target(&mut self, state: &mut SessionState, y: f32) {
        state.target_height = y;
        self.phase = VerticalPhase::Settling;
    }

    /// Advance one tick and return the resulting phase.
    pub fn tick(&mut self, state: &mut SessionState) -> VerticalPhase {
        let target = state.target_height;
        // A new target written by the sequencer re-arms settling.
        if self.phase == VerticalPhase::Settled && target != self.settled_on {
            self.phase = VerticalPhase::Settling;
        }
        if self.phase == VerticalPhase::Settled {
            return self.phase;
        }
        let y = state.position.y;
        let gap = target - y;
        if gap.abs() > self.tolerance {
            state.position.y = y + gap * self.smoothing;
        } else {
            state.position.y = target;
            self.settled_on = target;
            self.phase = VerticalPhase::Settled;
        }
        self.phase
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(&SessionParams::default())
    }
}
