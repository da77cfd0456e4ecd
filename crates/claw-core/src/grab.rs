//! Grab sequencer: Idle -> Descending -> Ascending -> Resolving -> Idle.
//!
//! Phase durations and exit actions are plain data (`PhaseStep`); a single
//! `Timer` on the session clock drives every transition. The sequencer only
//! waits on time, never on the claw actually reaching the bottom.

use crate::params::SessionParams;
use crate::prize::PrizeOutcome;
use crate::state::SessionState;
use crate::timer::Timer;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrabPhase {
    Idle,
    Descending,
    Ascending,
    /// Transient: entered and left within the same `advance` call.
    Resolving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitAction {
    /// Send the claw back to rest height.
    Raise,
    /// Release the lock and draw a prize.
    Resolve,
}

/// How long a phase lasts and what happens when it ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseStep {
    pub phase: GrabPhase,
    pub hold: Duration,
    pub on_exit: ExitAction,
    pub then: GrabPhase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrabEvent {
    Raising,
    Resolved(PrizeOutcome),
}

pub type GrabEvents = SmallVec<[GrabEvent; 2]>;

#[derive(Clone, Debug)]
pub struct GrabSequencer {
    steps: [PhaseStep; 2],
    grab_height: f32,
    rest_height: f32,
    phase: GrabPhase,
    timer: Timer,
}

impl GrabSequencer {
    pub fn new(params: &SessionParams) -> Self {
        Self {
            steps: [
                PhaseStep {
                    phase: GrabPhase::Descending,
                    hold: params.descend,
                    on_exit: ExitAction::Raise,
                    then: GrabPhase::Ascending,
                },
                PhaseStep {
                    phase: GrabPhase::Ascending,
                    hold: params.ascend,
                    on_exit: ExitAction::Resolve,
                    then: GrabPhase::Idle,
                },
            ],
            grab_height: params.grab_height,
            rest_height: params.rest_height,
            phase: GrabPhase::Idle,
            timer: Timer::idle(),
        }
    }

    #[inline]
    pub fn phase(&self) -> GrabPhase {
        self.phase
    }

    #[inline]
    pub fn steps(&self) -> &[PhaseStep] {
        &self.steps
    }

    /// Deadline of the pending phase transition, if a grab is running.
    #[inline]
    pub fn next_transition(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    fn step_for(&self, phase: GrabPhase) -> Option<PhaseStep> {
        self.steps.iter().copied().find(|s| s.phase == phase)
    }

    /// Start a grab if none is running. Requests made while the movement lock
    /// is held are dropped, not queued.
    pub fn request(&mut self, now: Duration, state: &mut SessionState) -> bool {
        if state.movement_lock || self.phase != GrabPhase::Idle {
            log::debug!("[grab] request ignored; phase={:?}", self.phase);
            return false;
        }
        state.movement_lock = true;
        state.target_height = self.grab_height;
        self.phase = GrabPhase::Descending;
        if let Some(step) = self.step_for(self.phase) {
            self.timer.schedule(now, step.hold);
        }
        log::debug!("[grab] descending at {:?}", now);
        true
    }

    /// Fire every transition whose deadline is at or before `now`. Each next
    /// deadline chains from the previous one, so a long frame cannot stretch
    /// the sequence.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        state: &mut SessionState,
        rng: &mut R,
        events: &mut GrabEvents,
    ) {
        while let Some(at) = self.timer.fire(now) {
            let Some(step) = self.step_for(self.phase) else {
                break;
            };
            match step.on_exit {
                ExitAction::Raise => {
                    state.target_height = self.rest_height;
                    events.push(GrabEvent::Raising);
                }
                ExitAction::Resolve => {
                    self.phase = GrabPhase::Resolving;
                    state.movement_lock = false;
                    let outcome = PrizeOutcome::draw(rng);
                    events.push(GrabEvent::Resolved(outcome));
                }
            }
            log::debug!("[grab] {:?} -> {:?} at {:?}", step.phase, step.then, at);
            self.phase = step.then;
            if let Some(next) = self.step_for(self.phase) {
                self.timer.schedule(at, next.hold);
            }
        }
    }
}

impl Default for GrabSequencer {
    fn default() -> Self {
        Self::new(&SessionParams::default())
    }
}
