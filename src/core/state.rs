//! Game progress state.
//!
//! ## GameState
//!
//! Per-game counters and flags:
//! - Whether the clock has started
//! - Cards face up in the active turn cycle (0..=2)
//! - Total moves and elapsed seconds
//! - The clock's cancellation token
//! - Move history
//!
//! Cards are not stored here; the `Board` owns them.
//!
//! ## HudSnapshot
//!
//! The immutable view of the counters handed to the renderer.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use crate::schedule::TaskId;

/// Cards face up per turn cycle.
pub const CARDS_PER_TURN: u8 = 2;

/// Counters and flags for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Clock has started (first reveal or start control).
    pub started: bool,

    /// Cards face up in the active turn cycle. Never exceeds 2; reset to 0 by
    /// the flip-back pass.
    pub active_revealed: u8,

    /// Card reveals attempted, including those ignored while two cards are up.
    pub total_moves: u32,

    /// Seconds on the game clock.
    pub elapsed_seconds: u64,

    /// Repeating clock task, if running.
    pub timer: Option<TaskId>,

    /// Board is locked (game won).
    pub locked: bool,

    /// Move history.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh state: not started, all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the clock is running.
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Check if the active turn cycle already has two cards up.
    #[must_use]
    pub fn turn_full(&self) -> bool {
        self.active_revealed >= CARDS_PER_TURN
    }

    /// Count a move. Returns the new move number.
    pub fn next_move(&mut self) -> u32 {
        self.total_moves += 1;
        self.total_moves
    }

    /// Record a move in history.
    pub fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    /// Snapshot the counters for display.
    #[must_use]
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            total_moves: self.total_moves,
            elapsed_seconds: self.elapsed_seconds,
        }
    }
}

/// Move and time counters at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub total_moves: u32,
    pub elapsed_seconds: u64,
}
