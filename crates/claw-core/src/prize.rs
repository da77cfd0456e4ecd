use crate::constants::{FAIL_BELOW, LOLLIPOP_BELOW, TEDDY_BELOW};
use rand::Rng;
use std::fmt;

/// Result of one completed grab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrizeOutcome {
    Fail,
    TeddyBear,
    Lollipop,
    Duckling,
}

impl PrizeOutcome {
    pub const ALL: [PrizeOutcome; 4] = [
        PrizeOutcome::Fail,
        PrizeOutcome::TeddyBear,
        PrizeOutcome::Lollipop,
        PrizeOutcome::Duckling,
    ];

    pub const PRIZES: [PrizeOutcome; 3] = [
        PrizeOutcome::TeddyBear,
        PrizeOutcome::Lollipop,
        PrizeOutcome::Duckling,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PrizeOutcome::Fail => "沒抓到",
            PrizeOutcome::TeddyBear => "熊熊娃娃",
            PrizeOutcome::Lollipop => "棒棒糖",
            PrizeOutcome::Duckling => "小鴨鴨",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PrizeOutcome::Fail => "💦",
            PrizeOutcome::TeddyBear => "🧸",
            PrizeOutcome::Lollipop => "🍭",
            PrizeOutcome::Duckling => "🦆",
        }
    }

    #[inline]
    pub fn is_win(self) -> bool {
        self != PrizeOutcome::Fail
    }

    /// Map a roll in [0, 1) onto the outcome table: 40% fail, 20% per prize.
    pub fn from_roll(r: f64) -> Self {
        if r < FAIL_BELOW {
            PrizeOutcome::Fail
        } else if r < TEDDY_BELOW {
            PrizeOutcome::TeddyBear
        } else if r < LOLLIPOP_BELOW {
            PrizeOutcome::Lollipop
        } else {
            PrizeOutcome::Duckling
        }
    }

    /// Stateless draw; each call is independent of earlier results.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_roll(rng.gen::<f64>())
    }
}

impl fmt::Display for PrizeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}
