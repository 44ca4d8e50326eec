//! Card model: positions, symbols, and face state.
//!
//! Cards are plain values owned by the `Board`. The turn resolver changes
//! their status; nothing else about a card changes after generation.

mod card;
mod symbol;

pub use card::{Card, CardIndex, CardStatus};
pub use symbol::{Symbol, DEFAULT_SYMBOLS};
