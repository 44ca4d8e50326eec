//! Board model and generation.
//!
//! The `Board` owns its cards exclusively. Game state never holds cards; it
//! asks the board for aggregate counts (hidden, unmatched) to detect
//! completion.

mod generator;
mod grid;

pub use generator::generate_board;
pub use grid::Board;
