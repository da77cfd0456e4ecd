use crate::prize::PrizeOutcome;
use crate::timer::Timer;
use std::time::Duration;

/// Keeps the latest outcome visible for a fixed window.
///
/// Publishing while an outcome is shown replaces it and restarts the window;
/// the replaced outcome never expires on its own.
#[derive(Clone, Debug)]
pub struct PrizeDisplay {
    window: Duration,
    current: Option<PrizeOutcome>,
    timer: Timer,
}

impl PrizeDisplay {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            current: None,
            timer: Timer::idle(),
        }
    }

    #[inline]
    pub fn visible(&self) -> Option<PrizeOutcome> {
        self.current
    }

    #[inline]
    pub fn expires_at(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// Show `outcome` from `now`. Returns the outcome it replaced, if any.
    pub fn publish(&mut self, outcome: PrizeOutcome, now: Duration) -> Option<PrizeOutcome> {
        self.timer.cancel();
        let replaced = self.current.replace(outcome);
        self.timer.schedule(now, self.window);
        replaced
    }

    /// Clear the outcome once its window has passed. Returns the expired outcome.
    pub fn advance(&mut self, now: Duration) -> Option<PrizeOutcome> {
        self.timer.fire(now)?;
        self.current.take()
    }

    pub fn clear(&mut self) {
        self.timer.cancel();
        self.current = None;
    }
}

impl Default for PrizeDisplay {
    fn default() -> Self {
        Self::new(crate::constants::prize_display_duration())
    }
}
