//! Turn resolution.
//!
//! A turn cycle goes 0 -> 1 -> 2 face-up cards, then ends in a match or a
//! flip-back:
//!
//! 1. Count the move; the first move of a game starts the clock.
//! 2. If fewer than two cards are up, reveal the card.
//! 3. On the second card, compare symbols. A pair becomes `Matched`. Either
//!    way a flip-back is scheduled after `FLIP_BACK_DELAY`; it hides what is
//!    still `Revealed` and ends the cycle.
//! 4. If no card is face down any more, schedule the win sequence after
//!    `WIN_DELAY`. This runs on its own timer, independent of the flip-back.
//!
//! Clicks while two cards are up count as moves but reveal nothing.

use tracing::{debug, info, instrument};

use super::GameSession;
use crate::cards::{CardIndex, CardStatus};
use crate::core::{GameError, MoveRecord, TurnOutcome, FLIP_BACK_DELAY, WIN_DELAY};
use crate::render::RenderPort;
use crate::schedule::TaskKind;

impl<R: RenderPort> GameSession<R> {
    /// Reveal a face-down card.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` if the card is off the board or already face
    /// up. The input dispatcher filters both; hitting them means a caller bug.
    #[instrument(skip(self), level = "debug")]
    pub fn reveal(&mut self, index: CardIndex) -> Result<TurnOutcome, GameError> {
        let card = *self
            .board
            .card(index)
            .ok_or_else(|| GameError::precondition(format!("{} is not on the board", index)))?;
        if !card.is_hidden() {
            return Err(GameError::precondition(format!("{} is already face up", index)));
        }

        let move_number = self.state.next_move();
        if !self.state.started {
            self.start_game()?;
        }

        let outcome = if self.state.turn_full() {
            debug!(move_number, "two cards already up, reveal ignored");
            TurnOutcome::Ignored(index)
        } else {
            self.state.active_revealed += 1;
            self.board.set_status(index, CardStatus::Revealed);

            let outcome = if self.state.turn_full() {
                self.resolve_pair(index)?
            } else {
                TurnOutcome::Revealed(index)
            };
            self.renderer.render_board(&self.board);
            outcome
        };

        self.state.record_move(MoveRecord::new(
            move_number,
            card.symbol,
            outcome,
            self.state.elapsed_seconds,
        ));
        debug!(move_number, ?outcome, "move resolved");

        self.check_for_win();
        Ok(outcome)
    }

    /// Compare the two face-up cards and schedule the flip-back.
    fn resolve_pair(&mut self, latest: CardIndex) -> Result<TurnOutcome, GameError> {
        let revealed = self.board.revealed_unmatched();
        let &[a, b] = revealed.as_slice() else {
            return Err(GameError::precondition(format!(
                "expected 2 revealed cards, found {}",
                revealed.len()
            )));
        };
        let first = if a == latest { b } else { a };

        let matched = match (self.board.card(first), self.board.card(latest)) {
            (Some(x), Some(y)) => x.pairs_with(y),
            _ => false,
        };

        let outcome = if matched {
            self.board.set_status(first, CardStatus::Matched);
            self.board.set_status(latest, CardStatus::Matched);
            TurnOutcome::Matched(first, latest)
        } else {
            TurnOutcome::Mismatched(first, latest)
        };

        self.scheduler.schedule_once(FLIP_BACK_DELAY, TaskKind::FlipBack);
        Ok(outcome)
    }

    /// Schedule the win sequence once nothing is face down.
    fn check_for_win(&mut self) {
        if self.board.hidden_count() == 0 {
            info!(
                moves = self.state.total_moves,
                seconds = self.state.elapsed_seconds,
                "all cards face up"
            );
            self.scheduler.schedule_once(WIN_DELAY, TaskKind::Win);
        }
    }

    /// Hide every revealed, unmatched card and end the turn cycle.
    pub(super) fn flip_back(&mut self) {
        let flipped = self.board.flip_back_unmatched();
        self.state.active_revealed = 0;

        if !flipped.is_empty() {
            self.renderer.render_board(&self.board);
        }
        debug!(flipped = flipped.len(), "flip-back");
    }
}
