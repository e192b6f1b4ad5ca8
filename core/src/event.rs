use serde::{Deserialize, Serialize};

use crate::{FlagOutcome, RevealOutcome};

/// Notifications the presentation layer reacts to, mostly with audio cues.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A reveal hit a mine; the board has been force-opened.
    MineTriggered,
    /// A reveal opened a safe cell.
    SafeReveal,
    /// The board is cleared.
    Victory,
    /// Fired a fixed delay after [`MineTriggered`](Self::MineTriggered).
    /// Scheduling is the presentation layer's job; the source never cancels
    /// the timer on reset, so neither do we.
    GameOverDelayed,
}

/// Delay between `MineTriggered` and `GameOverDelayed`.
pub const GAME_OVER_CUE_DELAY_MS: u32 = 1_000;

impl RevealOutcome {
    /// Immediate notifications raised by this outcome, in emission order.
    pub const fn events(self) -> &'static [GameEvent] {
        use GameEvent::*;
        match self {
            Self::NoChange => &[],
            Self::Revealed => &[SafeReveal],
            Self::HitMine => &[MineTriggered],
            // the winning reveal still opened a safe cell
            Self::Won => &[SafeReveal, Victory],
        }
    }
}

impl FlagOutcome {
    /// Immediate notifications raised by this outcome.
    pub const fn events(self) -> &'static [GameEvent] {
        use GameEvent::*;
        match self {
            Self::NoChange => &[],
            Self::Flagged => &[],
            Self::Won => &[Victory],
        }
    }
}
