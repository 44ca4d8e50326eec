//! Input dispatch.
//!
//! Single entry point for clicks. Filters out everything the turn resolver
//! must never see: face-up cards, unknown positions, and the start control
//! once disabled.

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use super::GameSession;
use crate::cards::{Card, CardIndex};
use crate::core::{GameError, TurnOutcome};
use crate::render::RenderPort;

/// What was clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// A card on the board.
    Card(CardIndex),
    /// The manual start control.
    StartControl,
    /// Anything else.
    Other,
}

/// What a dispatched click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dispatched {
    /// A card was handed to the turn resolver.
    Turn(TurnOutcome),
    /// The clock was started from the start control.
    Started,
    /// The click was dropped.
    Ignored,
}

impl<R: RenderPort> GameSession<R> {
    /// Route a click.
    ///
    /// Card clicks reach the turn resolver only for face-down cards. Start
    /// clicks start the clock only while the control is enabled. Everything
    /// else is ignored.
    #[instrument(skip(self), level = "debug")]
    pub fn dispatch(&mut self, target: ClickTarget) -> Result<Dispatched, GameError> {
        match target {
            ClickTarget::Card(index) if self.board.card(index).is_some_and(Card::is_hidden) => {
                self.reveal(index).map(Dispatched::Turn)
            }
            ClickTarget::StartControl if self.start_enabled() => {
                self.start_game()?;
                Ok(Dispatched::Started)
            }
            _ => {
                trace!(?target, "click ignored");
                Ok(Dispatched::Ignored)
            }
        }
    }
}
