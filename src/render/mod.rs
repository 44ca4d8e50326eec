//! Render port: the boundary to the presentation layer.
//!
//! The engine never touches a display surface. It pushes immutable
//! snapshots to a `RenderPort` implementation supplied by the host:
//! - `render_board`: after generation and after every card status change
//! - `update_hud`: on every clock tick
//! - `set_start_enabled`: off when the clock starts, on for a new game
//! - `lock_board` + `show_win_banner`: once, when the game is won
//!
//! `Board` clones are O(1), so passing full snapshots is cheap.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::HudSnapshot;

/// Final score shown on the win banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    /// Moves taken to clear the board.
    pub total_moves: u32,
    /// Seconds on the clock when the banner was shown.
    pub elapsed_seconds: u64,
}

impl From<HudSnapshot> for WinSummary {
    fn from(hud: HudSnapshot) -> Self {
        Self {
            total_moves: hud.total_moves,
            elapsed_seconds: hud.elapsed_seconds,
        }
    }
}

impl std::fmt::Display for WinSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You won in {} moves and {} seconds",
            self.total_moves, self.elapsed_seconds
        )
    }
}

/// Presentation layer callbacks.
///
/// Implementations must not call back into the session.
pub trait RenderPort {
    /// Draw the board.
    fn render_board(&mut self, board: &Board);

    /// Refresh the move and time counters.
    fn update_hud(&mut self, hud: &HudSnapshot);

    /// Show the win banner.
    fn show_win_banner(&mut self, summary: &WinSummary);

    /// Visually lock the board after a win.
    fn lock_board(&mut self);

    /// Enable or disable the manual start control.
    fn set_start_enabled(&mut self, enabled: bool);
}

/// Renderer that discards everything (headless play, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl RenderPort for NullRenderer {
    fn render_board(&mut self, _board: &Board) {}

    fn update_hud(&mut self, _hud: &HudSnapshot) {}

    fn show_win_banner(&mut self, _summary: &WinSummary) {}

    fn lock_board(&mut self) {}

    fn set_start_enabled(&mut self, _enabled: bool) {}
}

impl<R: RenderPort + ?Sized> RenderPort for Box<R> {
    fn render_board(&mut self, board: &Board) {
        (**self).render_board(board);
    }

    fn update_hud(&mut self, hud: &HudSnapshot) {
        (**self).update_hud(hud);
    }

    fn show_win_banner(&mut self, summary: &WinSummary) {
        (**self).show_win_banner(summary);
    }

    fn lock_board(&mut self) {
        (**self).lock_board();
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        (**self).set_start_enabled(enabled);
    }
}
