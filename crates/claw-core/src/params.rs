use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

/// Closed interval used for the horizontal table bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{axis} bounds are invalid: min={min} max={max}")]
    Bounds {
        axis: &'static str,
        min: f32,
        max: f32,
    },
    #[error("move step must be finite and positive, got {0}")]
    Step(f32),
    #[error("height smoothing must lie in (0, 1), got {0}")]
    Smoothing(f32),
    #[error("height tolerance must be finite and positive, got {0}")]
    Tolerance(f32),
    #[error("claw heights must be finite, got {0}")]
    Height(f32),
    #[error("{0} duration must be non-zero")]
    Duration(&'static str),
}

/// Per-session tuning. `Default` mirrors the values in `constants`.
#[derive(Clone, Debug)]
pub struct SessionParams {
    pub x_bounds: Bounds,
    pub z_bounds: Bounds,
    pub move_step: f32,
    pub height_smoothing: f32,
    pub height_tolerance: f32,
    pub rest_height: f32,
    pub grab_height: f32,
    pub descend: Duration,
    pub ascend: Duration,
    pub prize_display: Duration,
    /// Fixed seed for the prize draw; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Freeze x/z while a grab sequence is running.
    pub lock_movement_during_grab: bool,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            x_bounds: Bounds::new(X_MIN, X_MAX),
            z_bounds: Bounds::new(Z_MIN, Z_MAX),
            move_step: MOVE_STEP,
            height_smoothing: HEIGHT_SMOOTHING,
            height_tolerance: HEIGHT_TOLERANCE,
            rest_height: REST_HEIGHT,
            grab_height: GRAB_HEIGHT,
            descend: descend_duration(),
            ascend: ascend_duration(),
            prize_display: prize_display_duration(),
            seed: None,
            lock_movement_during_grab: false,
        }
    }
}

impl SessionParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        check_bounds("x", self.x_bounds)?;
        check_bounds("z", self.z_bounds)?;
        if !(self.move_step.is_finite() && self.move_step > 0.0) {
            return Err(ParamsError::Step(self.move_step));
        }
        if !(self.height_smoothing > 0.0 && self.height_smoothing < 1.0) {
            return Err(ParamsError::Smoothing(self.height_smoothing));
        }
        if !(self.height_tolerance.is_finite() && self.height_tolerance > 0.0) {
            return Err(ParamsError::Tolerance(self.height_tolerance));
        }
        for h in [self.rest_height, self.grab_height] {
            if !h.is_finite() {
                return Err(ParamsError::Height(h));
            }
        }
        if self.descend.is_zero() {
            return Err(ParamsError::Duration("descend"));
        }
        if self.ascend.is_zero() {
            return Err(ParamsError::Duration("ascend"));
        }
        if self.prize_display.is_zero() {
            return Err(ParamsError::Duration("prize display"));
        }
        Ok(())
    }
}

fn check_bounds(axis: &'static str, b: Bounds) -> Result<(), ParamsError> {
    if b.min.is_finite() && b.max.is_finite() && b.min <= b.max {
        Ok(())
    } else {
        Err(ParamsError::Bounds {
            axis,
            min: b.min,
            max: b.max,
        })
    }
}
