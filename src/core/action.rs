//! Turn outcomes and the move history.
//!
//! Every card reveal is a move. The resolver reports what the move did as a
//! `TurnOutcome` and appends a `MoveRecord` to the history, which supports:
//! - Replay/debugging
//! - Asserting game flow in tests

use serde::{Deserialize, Serialize};

use crate::cards::{CardIndex, Symbol};

/// What a single reveal did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// First card of a turn cycle turned face up.
    Revealed(CardIndex),

    /// Second card matched the first; both stay face up.
    Matched(CardIndex, CardIndex),

    /// Second card did not match; both flip back after the delay.
    Mismatched(CardIndex, CardIndex),

    /// Two cards were already up. The move counts but nothing is revealed.
    Ignored(CardIndex),
}

impl TurnOutcome {
    /// The card the player clicked.
    #[must_use]
    pub fn card(&self) -> CardIndex {
        match *self {
            TurnOutcome::Revealed(card) | TurnOutcome::Ignored(card) => card,
            TurnOutcome::Matched(_, second) | TurnOutcome::Mismatched(_, second) => second,
        }
    }

    /// Check if this move completed a turn cycle (two cards compared).
    #[must_use]
    pub fn completes_turn(&self) -> bool {
        matches!(self, TurnOutcome::Matched(..) | TurnOutcome::Mismatched(..))
    }
}

/// A recorded move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub move_number: u32,

    /// Symbol on the clicked card.
    pub symbol: Symbol,

    /// What the move did.
    pub outcome: TurnOutcome,

    /// Whole seconds on the game clock when the move was made.
    pub elapsed_seconds: u64,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(move_number: u32, symbol: Symbol, outcome: TurnOutcome, elapsed_seconds: u64) -> Self {
        Self {
            move_number,
            symbol,
            outcome,
            elapsed_seconds,
        }
    }
}
