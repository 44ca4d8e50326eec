//! Random board generation.

use tracing::debug;

use super::grid::Board;
use crate::core::{GameConfig, GameError, GameRng};

/// Generate a shuffled board of face-down pairs.
///
/// Picks `dimension² / 2` distinct symbols from the configured alphabet,
/// duplicates them into pairs, shuffles the pairs and lays them out row by
/// row.
///
/// # Errors
///
/// - `Configuration` if the dimension is odd or zero.
/// - `InvalidArgument` if the board needs more pairs than there are symbols.
///   A dimension whose square overflows `usize` reports `requested` as
///   `usize::MAX`.
///
/// ```
/// use rust_pairs::board::generate_board;
/// use rust_pairs::core::{GameConfig, GameRng};
///
/// let mut rng = GameRng::new(42);
/// let board = generate_board(&GameConfig::new(4), &mut rng).unwrap();
///
/// assert_eq!(board.len(), 16);
/// assert!(board.symbol_counts().values().all(|&n| n == 2));
/// ```
pub fn generate_board(config: &GameConfig, rng: &mut GameRng) -> Result<Board, GameError> {
    config.validate()?;

    let pair_count = config.pair_count().ok_or(GameError::InvalidArgument {
        requested: usize::MAX,
        available: config.symbols.len(),
    })?;
    let picks = rng.pick_random(&config.symbols, pair_count)?;
    let pairs: Vec<_> = picks.iter().chain(picks.iter()).copied().collect();
    let layout = rng.shuffled(&pairs);

    let board = Board::from_symbols(config.dimension, layout)?;
    debug!(
        dimension = config.dimension,
        pairs = pair_count,
        "generated board"
    );
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    #[test]
    fn test_generate_4x4() {
        let mut rng = GameRng::new(42);
        let board = generate_board(&GameConfig::new(4), &mut rng).unwrap();

        assert_eq!(board.dimension(), 4);
        assert_eq!(board.len(), 16);
        assert_eq!(board.hidden_count(), 16);

        let counts = board.symbol_counts();
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_generate_2x2() {
        let mut rng = GameRng::new(1);
        let board = generate_board(&GameConfig::new(2), &mut rng).unwrap();

        assert_eq!(board.len(), 4);
        assert_eq!(board.symbol_counts().len(), 2);
    }

    #[test]
    fn test_generate_odd_dimension() {
        let mut rng = GameRng::new(42);

        for dimension in [1, 3, 5] {
            let err = generate_board(&GameConfig::new(dimension), &mut rng).unwrap_err();
            assert_eq!(err, GameError::Configuration { dimension });
        }
    }

    #[test]
    fn test_generate_too_few_symbols() {
        let mut rng = GameRng::new(42);

        // 6x6 needs 18 pairs, the default alphabet has 10
        let err = generate_board(&GameConfig::new(6), &mut rng).unwrap_err();
        assert_eq!(err, GameError::InvalidArgument { requested: 18, available: 10 });
    }

    #[test]
    fn test_generate_huge_dimension() {
        let mut rng = GameRng::new(1);

        // Squares that overflow, and one that fits but dwarfs the alphabet
        let overflowing = [1 << (usize::BITS / 2), usize::MAX - 1];
        for dimension in overflowing {
            let err = generate_board(&GameConfig::new(dimension), &mut rng).unwrap_err();
            assert_eq!(err, GameError::InvalidArgument { requested: usize::MAX, available: 10 });
        }

        let err = generate_board(&GameConfig::new(256), &mut rng).unwrap_err();
        assert_eq!(err, GameError::InvalidArgument { requested: 32768, available: 10 });
    }

    #[test]
    fn test_generate_larger_alphabet() {
        let mut rng = GameRng::new(42);
        let symbols = ('a'..='z').map(Symbol::new);
        let config = GameConfig::new(6).with_symbols(symbols);

        let board = generate_board(&config, &mut rng).unwrap();
        assert_eq!(board.len(), 36);
        assert_eq!(board.symbol_counts().len(), 18);
    }

    #[test]
    fn test_generate_deterministic() {
        let config = GameConfig::new(4);
        let board1 = generate_board(&config, &mut GameRng::new(9)).unwrap();
        let board2 = generate_board(&config, &mut GameRng::new(9)).unwrap();
        let board3 = generate_board(&config, &mut GameRng::new(10)).unwrap();

        assert_eq!(board1, board2);
        assert_ne!(board1, board3);
    }
}
