//! Card face symbols.

use serde::{Deserialize, Serialize};

/// A card face symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Self(ch)
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The default symbol alphabet. Supports boards up to 4x4 (8 pairs).
pub const DEFAULT_SYMBOLS: [Symbol; 10] = [
    Symbol('🥔'),
    Symbol('🍒'),
    Symbol('🥑'),
    Symbol('🌽'),
    Symbol('🥕'),
    Symbol('🍇'),
    Symbol('🍉'),
    Symbol('🍌'),
    Symbol('🥭'),
    Symbol('🍍'),
];
