//! Game configuration.
//!
//! The only gameplay knob is the grid dimension. Hosts may also pin the RNG
//! seed (for replays and tests) and swap the symbol alphabet. Timings are
//! fixed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::{Symbol, DEFAULT_SYMBOLS};

/// Delay before unmatched revealed cards flip back.
pub const FLIP_BACK_DELAY: Duration = Duration::from_secs(1);

/// Delay between the last reveal and the win sequence.
pub const WIN_DELAY: Duration = Duration::from_secs(1);

/// Game clock resolution.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Default grid dimension (4x4, 8 pairs).
pub const DEFAULT_DIMENSION: usize = 4;

/// Complete game configuration.
///
/// ```
/// use rust_pairs::core::GameConfig;
///
/// let config = GameConfig::new(4).with_seed(7);
/// assert_eq!(config.card_count(), Some(16));
/// assert_eq!(config.pair_count(), Some(8));
/// assert!(config.validate().is_ok());
///
/// assert!(GameConfig::new(3).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards per row and per column. Must be even and non-zero.
    pub dimension: usize,

    /// RNG seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Symbols to draw pairs from.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<Symbol>,
}

fn default_symbols() -> Vec<Symbol> {
    DEFAULT_SYMBOLS.to_vec()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl GameConfig {
    /// Create a configuration for a `dimension` x `dimension` board.
    ///
    /// The dimension is not checked here; call `validate`.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            seed: None,
            symbols: default_symbols(),
        }
    }

    /// Pin the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the symbol alphabet.
    #[must_use]
    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        self.symbols = symbols.into_iter().collect();
        self
    }

    /// Total number of cards on the board, or `None` if `dimension²`
    /// overflows `usize`.
    #[must_use]
    pub fn card_count(&self) -> Option<usize> {
        self.dimension.checked_mul(self.dimension)
    }

    /// Number of symbol pairs on the board, or `None` if the card count
    /// overflows.
    #[must_use]
    pub fn pair_count(&self) -> Option<usize> {
        self.card_count().map(|cards| cards / 2)
    }

    /// Check the dimension is even and non-zero.
    ///
    /// The alphabet size is not checked here: a board needing more pairs than
    /// there are symbols fails during generation with `InvalidArgument`.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.dimension == 0 || self.dimension % 2 != 0 {
            return Err(GameError::Configuration {
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.dimension, 4);
        assert_eq!(config.seed, None);
        assert_eq!(config.symbols.len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(2)
            .with_seed(99)
            .with_symbols([Symbol::new('a'), Symbol::new('b')]);

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.symbols, vec![Symbol::new('a'), Symbol::new('b')]);
        assert_eq!(config.card_count(), Some(4));
        assert_eq!(config.pair_count(), Some(2));
    }

    #[test]
    fn test_card_count_overflow() {
        let config = GameConfig::new(1 << (usize::BITS / 2));

        assert!(config.validate().is_ok());
        assert_eq!(config.card_count(), None);
        assert_eq!(config.pair_count(), None);
    }

    #[test]
    fn test_validate_odd_and_zero() {
        for dimension in [0, 1, 3, 5, 7] {
            let err = GameConfig::new(dimension).validate().unwrap_err();
            assert_eq!(err, GameError::Configuration { dimension });
        }

        for dimension in [2, 4, 6] {
            assert!(GameConfig::new(dimension).validate().is_ok());
        }
    }

    #[test]
    fn test_deserialize_minimal() {
        let config: GameConfig = serde_json::from_str(r#"{"dimension": 2}"#).unwrap();

        assert_eq!(config.dimension, 2);
        assert_eq!(config.seed, None);
        assert_eq!(config.symbols, DEFAULT_SYMBOLS.to_vec());
    }

    #[test]
    fn test_timings() {
        assert_eq!(FLIP_BACK_DELAY, Duration::from_secs(1));
        assert_eq!(WIN_DELAY, Duration::from_secs(1));
        assert_eq!(TICK_INTERVAL, Duration::from_secs(1));
    }
}
