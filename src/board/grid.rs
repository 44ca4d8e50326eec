//! The card grid.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardIndex, CardStatus, Symbol};
use crate::core::GameError;

/// Largest board `CardIndex` can address.
const MAX_CARDS: usize = u32::MAX as usize;

/// A `dimension` x `dimension` grid of cards in row-major order.
///
/// Uses an `im::Vector` so a clone is O(1); renderers receive full board
/// snapshots after every change without copying the cards.
///
/// ```
/// use rust_pairs::board::Board;
/// use rust_pairs::cards::Symbol;
///
/// let symbols = ['a', 'b', 'b', 'a'].map(Symbol::new);
/// let board = Board::from_symbols(2, symbols).unwrap();
///
/// assert_eq!(board.len(), 4);
/// assert_eq!(board.hidden_count(), 4);
/// assert!(!board.is_complete());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimension: usize,
    cards: Vector<Card>,
}

impl Board {
    /// Build a face-down board from symbols laid out in row-major order.
    ///
    /// # Errors
    ///
    /// - `Configuration` if `dimension` is odd or zero.
    /// - `InvalidArgument` if `dimension²` is more cards than a `CardIndex`
    ///   can address.
    /// - `PreconditionViolation` if the symbol count is not `dimension²` or
    ///   some symbol does not appear exactly twice.
    pub fn from_symbols(
        dimension: usize,
        symbols: impl IntoIterator<Item = Symbol>,
    ) -> Result<Self, GameError> {
        if dimension == 0 || dimension % 2 != 0 {
            return Err(GameError::Configuration { dimension });
        }

        let card_count = dimension
            .checked_mul(dimension)
            .filter(|&n| n <= MAX_CARDS)
            .ok_or(GameError::InvalidArgument {
                requested: dimension.saturating_mul(dimension),
                available: MAX_CARDS,
            })?;

        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        if symbols.len() != card_count {
            return Err(GameError::precondition(format!(
                "{}x{} board needs {} symbols, got {}",
                dimension,
                dimension,
                card_count,
                symbols.len()
            )));
        }

        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| {
                let index = u32::try_from(i)
                    .map_err(|_| GameError::precondition(format!("card position {} out of range", i)))?;
                Ok(Card::new(CardIndex::new(index), symbol))
            })
            .collect::<Result<Vector<Card>, GameError>>()?;

        let board = Self { dimension, cards };
        if let Some((symbol, count)) = board
            .symbol_counts()
            .into_iter()
            .find(|&(_, count)| count != 2)
        {
            return Err(GameError::precondition(format!(
                "symbol {} appears {} times, expected 2",
                symbol, count
            )));
        }

        Ok(board)
    }

    /// Cards per row and per column.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.as_usize())
    }

    /// Iterate over all cards in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over the cards of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .skip(row.saturating_mul(self.dimension))
            .take(self.dimension)
    }

    /// Row and column of a card position.
    #[must_use]
    pub fn position(&self, index: CardIndex) -> (usize, usize) {
        let i = index.as_usize();
        (i / self.dimension, i % self.dimension)
    }

    // === Aggregate Queries ===

    /// Count cards in a given status.
    #[must_use]
    pub fn count_with_status(&self, status: CardStatus) -> usize {
        self.cards.iter().filter(|c| c.status == status).count()
    }

    /// Count face-down cards.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.count_with_status(CardStatus::Hidden)
    }

    /// Count cards that are not yet matched.
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.len() - self.count_with_status(CardStatus::Matched)
    }

    /// Check if every card is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched_count() == 0
    }

    /// Positions of cards that are revealed but not matched.
    #[must_use]
    pub fn revealed_unmatched(&self) -> SmallVec<[CardIndex; 2]> {
        self.cards
            .iter()
            .filter(|c| c.is_revealed())
            .map(|c| c.index)
            .collect()
    }

    /// How many times each symbol appears.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    // === Mutation ===

    /// Set the status of a card.
    ///
    /// Returns the previous status, or `None` if the index is off the board.
    pub(crate) fn set_status(&mut self, index: CardIndex, status: CardStatus) -> Option<CardStatus> {
        let card = self.cards.get_mut(index.as_usize())?;
        let previous = card.status;
        card.status = status;
        Some(previous)
    }

    /// Turn every revealed, unmatched card face down.
    ///
    /// Returns the positions that were flipped.
    pub(crate) fn flip_back_unmatched(&mut self) -> SmallVec<[CardIndex; 2]> {
        let flipped = self.revealed_unmatched();
        for &index in &flipped {
            self.set_status(index, CardStatus::Hidden);
        }
        flipped
    }
}
