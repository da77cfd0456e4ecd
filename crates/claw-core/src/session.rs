//! The game session: single owner of all mutable claw state and timers.

use crate::display::PrizeDisplay;
use crate::grab::{GrabEvent, GrabEvents, GrabPhase, GrabSequencer};
use crate::input::{DirectionalIntent, InputSampler};
use crate::motion::{MotionController, VerticalPhase};
use crate::params::{ParamsError, SessionParams};
use crate::prize::PrizeOutcome;
use crate::state::{ClawPosition, SessionState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    GrabStarted,
    ClawRaising,
    GrabResolved(PrizeOutcome),
    PrizeExpired(PrizeOutcome),
}

pub type SessionEvents = SmallVec<[SessionEvent; 4]>;

pub struct GameSession {
    params: SessionParams,
    state: SessionState,
    sampler: InputSampler,
    motion: MotionController,
    sequencer: GrabSequencer,
    display: PrizeDisplay,
    rng: StdRng,
    clock: Duration,
}

impl GameSession {
    pub fn new(params: SessionParams) -> Result<Self, ParamsError> {
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            state: SessionState::new(params.rest_height),
            sampler: InputSampler::new(&params),
            motion: MotionController::new(&params),
            sequencer: GrabSequencer::new(&params),
            display: PrizeDisplay::new(params.prize_display),
            rng,
            clock: Duration::ZERO,
            params,
        })
    }

    #[inline]
    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    #[inline]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[inline]
    pub fn position(&self) -> ClawPosition {
        self.state.position
    }

    #[inline]
    pub fn target_height(&self) -> f32 {
        self.state.target_height
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.state.movement_lock
    }

    #[inline]
    pub fn grab_phase(&self) -> GrabPhase {
        self.sequencer.phase()
    }

    #[inline]
    pub fn vertical_phase(&self) -> VerticalPhase {
        self.motion.phase()
    }

    #[inline]
    pub fn visible_prize(&self) -> Option<PrizeOutcome> {
        self.display.visible()
    }

    /// Session clock: total simulated time passed to `tick`.
    #[inline]
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Single entry point for grab requests. Returns `false` if a grab is
    /// already running.
    pub fn request_grab(&mut self) -> bool {
        self.sequencer.request(self.clock, &mut self.state)
    }

    /// Advance timers by `dt`, then apply one tick of input and smoothing.
    pub fn tick(&mut self, dt: Duration, intent: DirectionalIntent) -> SessionEvents {
        self.clock += dt;
        let now = self.clock;
        let mut events = SessionEvents::new();

        if let Some(expired) = self.display.advance(now) {
            log::debug!("[prize] {} cleared", expired.label());
            events.push(SessionEvent::PrizeExpired(expired));
        }

        let mut grab_events = GrabEvents::new();
        self.sequencer
            .advance(now, &mut self.state, &mut self.rng, &mut grab_events);
        for ev in grab_events {
            match ev {
                GrabEvent::Raising => events.push(SessionEvent::ClawRaising),
                GrabEvent::Resolved(outcome) => {
                    if let Some(old) = self.display.publish(outcome, now) {
                        log::debug!("[prize] {} replaced", old.label());
                    }
                    log::info!("[prize] {} {}", outcome.icon(), outcome.label());
                    events.push(SessionEvent::GrabResolved(outcome));
                }
            }
        }

        let frozen = self.params.lock_movement_during_grab && self.state.movement_lock;
        if !frozen {
            self.sampler.sample(intent, &mut self.state);
        }
        self.motion.tick(&mut self.state);
        events
    }

    /// `request_grab` wrapped as an event, for front-ends that fan events out.
    pub fn grab(&mut self) -> Option<SessionEvent> {
        self.request_grab().then_some(SessionEvent::GrabStarted)
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("grab_phase", &self.sequencer.phase())
            .field("vertical_phase", &self.motion.phase())
            .field("visible_prize", &self.display.visible())
            .field("clock", &self.clock)
            .finish()
    }
}
