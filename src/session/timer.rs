//! Game clock: start, tick, stop, and the win sequence.

use tracing::{debug, info, instrument, warn};

use super::GameSession;
use crate::core::{GameError, TICK_INTERVAL};
use crate::render::{RenderPort, WinSummary};
use crate::schedule::TaskKind;

impl<R: RenderPort> GameSession<R> {
    /// Start the game clock and disable the start control.
    ///
    /// Called by the first reveal or by the start control.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if the game has already started. No second
    /// clock is created.
    #[instrument(skip(self), level = "debug")]
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.state.started {
            warn!("start requested while already started");
            return Err(GameError::precondition("game already started"));
        }

        self.state.started = true;
        self.renderer.set_start_enabled(false);
        self.state.timer = Some(self.scheduler.schedule_repeating(TICK_INTERVAL, TaskKind::Tick));
        info!("clock started");
        Ok(())
    }

    /// Cancel the clock. Returns true if it was running.
    pub fn stop_timer(&mut self) -> bool {
        match self.state.timer.take() {
            Some(id) => {
                self.scheduler.cancel(id);
                debug!(seconds = self.state.elapsed_seconds, "clock stopped");
                true
            }
            None => false,
        }
    }

    pub(super) fn tick(&mut self) {
        self.state.elapsed_seconds += 1;
        self.renderer.update_hud(&self.state.hud());
    }

    /// Lock the board, show the banner, stop the clock.
    pub(super) fn finish_win(&mut self) {
        let summary = WinSummary::from(self.state.hud());

        self.state.locked = true;
        self.renderer.lock_board();
        self.renderer.show_win_banner(&summary);
        self.stop_timer();
        info!(
            moves = summary.total_moves,
            seconds = summary.elapsed_seconds,
            "game won"
        );
    }
}
