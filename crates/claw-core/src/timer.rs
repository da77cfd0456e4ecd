use std::time::Duration;

/// One-shot deadline on the session clock.
///
/// Nothing runs asynchronously: the owner polls `fire` from the frame loop,
/// so a dropped timer can never fire into discarded state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Duration>,
}

impl Timer {
    pub const fn idle() -> Self {
        Self { deadline: None }
    }

    /// Arm (or re-arm) to fire at `now + after`. Any pending deadline is replaced.
    pub fn schedule(&mut self, now: Duration, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns the deadline and disarms once `now` has reached it.
    pub fn fire(&mut self, now: Duration) -> Option<Duration> {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                Some(at)
            }
            _ => None,
        }
    }
}
