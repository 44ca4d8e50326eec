//! Error taxonomy for game generation and turn resolution.
//!
//! Every variant is fatal: operations are deterministic local state
//! transitions, so there is nothing to retry. A `Configuration` error means
//! no board is ever rendered; the other two indicate a caller bug.

use derive_more::{Display, Error};

/// Errors raised by the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Grid dimension is not an even positive integer.
    #[display("Board dimension must be an even positive number, got {dimension}")]
    Configuration {
        /// The rejected dimension.
        dimension: usize,
    },

    /// More items requested from the randomizer than are available.
    #[display("Cannot pick {requested} items from a sequence of {available}")]
    InvalidArgument {
        /// Number of items requested.
        requested: usize,
        /// Number of items in the source sequence.
        available: usize,
    },

    /// An operation was invoked out of protocol.
    #[display("Precondition violated: {_0}")]
    PreconditionViolation(#[error(not(source))] String),
}

impl GameError {
    /// Shorthand for a precondition violation.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation(message.into())
    }

    /// Check if this error is a configuration failure.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
