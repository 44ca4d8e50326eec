//! Core engine types: configuration, errors, RNG, state, move history.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{MoveRecord, TurnOutcome};
pub use config::{GameConfig, DEFAULT_DIMENSION, FLIP_BACK_DELAY, TICK_INTERVAL, WIN_DELAY};
pub use error::GameError;
pub use rng::GameRng;
pub use state::{GameState, HudSnapshot, CARDS_PER_TURN};
