//! Card identity and per-card status.
//!
//! A `Card` is created at board generation with a fixed position and symbol.
//! Only its `status` changes during play:
//!
//! ```text
//! Hidden --reveal--> Revealed --match--> Matched
//!    ^                  |
//!    +----flip-back-----+
//! ```

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Position of a card on the board (row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index as a `usize` for slice access.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Face state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face down.
    #[default]
    Hidden,
    /// Face up in the current turn cycle, not yet matched.
    Revealed,
    /// Permanently face up.
    Matched,
}

impl CardStatus {
    /// Check if the card's face is showing.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !matches!(self, CardStatus::Hidden)
    }
}

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position on the board.
    pub index: CardIndex,

    /// Face symbol. Exactly two cards on a board share each symbol.
    pub symbol: Symbol,

    /// Current face state.
    pub status: CardStatus,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(index: CardIndex, symbol: Symbol) -> Self {
        Self {
            index,
            symbol,
            status: CardStatus::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.status == CardStatus::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }

    /// Check if two cards form a pair (same symbol, different positions).
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.index != other.index && self.symbol == other.symbol
    }
}
