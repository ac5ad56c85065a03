//! Fatal error taxonomy.
//!
//! Invalid card selections are not errors: they come back as
//! `SelectionResult::Rejected` so the caller can log or ignore them.

use thiserror::Error;

/// Errors surfaced to the caller of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Grid dimensions are out of bounds or give an odd card count.
    #[error("Invalid grid size {rows}x{cols}: {reason}")]
    InvalidConfiguration { rows: u8, cols: u8, reason: &'static str },

    /// A custom symbol pool had no symbols in it.
    #[error("Symbol pool must contain at least one symbol")]
    EmptySymbolPool,

    /// A custom symbol pool had more faces than a `Symbol` can address.
    #[error("Symbol pool has {len} symbols, at most {max} are supported")]
    SymbolPoolTooLarge { len: usize, max: usize },

    /// A player number outside 1 and 2.
    #[error("Invalid player number {0}")]
    InvalidPlayer(u8),

    /// An input event needs a running session but none has been started.
    #[error("No game session has been started")]
    NoSession,
}

impl GameError {
    /// Message suitable for showing to the player.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GameError::InvalidConfiguration { .. } => {
                "Invalid grid size! Ensure total number of cards is even and values are between 2 and 10."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}
