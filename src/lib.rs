//! # rust-pairs
//!
//! Engine for a memory-matching card game: a square grid of face-down cards
//! is revealed two at a time, matching pairs stay face up, and the game is
//! won when every card is matched. Moves and elapsed seconds are tracked.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine never draws anything. Hosts implement
//!    `RenderPort` and receive immutable snapshots.
//!
//! 2. **Explicit Time**: Delays (flip-back, win, clock tick) are scheduled
//!    tasks on a virtual clock. Nothing happens until the host calls
//!    `GameSession::advance`.
//!
//! 3. **Deterministic**: Boards come from a seeded ChaCha8 RNG. The same
//!    seed gives the same game.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG, game state, move history
//! - `cards`: Card positions, symbols, face state
//! - `board`: Board model and random generation
//! - `schedule`: Virtual-time task scheduler
//! - `render`: Render port trait
//! - `session`: Game controller, turn resolver, clock, input dispatch

pub mod core;
pub mod cards;
pub mod board;
pub mod schedule;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng,
    GameState, HudSnapshot, MoveRecord, TurnOutcome,
    FLIP_BACK_DELAY, TICK_INTERVAL, WIN_DELAY,
};

pub use crate::cards::{Card, CardIndex, CardStatus, Symbol, DEFAULT_SYMBOLS};

pub use crate::board::{generate_board, Board};

pub use crate::schedule::{ScheduledTask, Scheduler, TaskId, TaskKind};

pub use crate::render::{NullRenderer, RenderPort, WinSummary};

pub use crate::session::{ClickTarget, Dispatched, GameSession, GameSnapshot};
