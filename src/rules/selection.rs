//! Selection outcomes and the move record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::result::GameResult;
use crate::cards::{CardId, Symbol};
use crate::core::PlayerId;

/// Why a selection was ignored. Never fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("game is not in progress")]
    NotInProgress,
    #[error("no card with that id")]
    OutOfRange,
    #[error("card is already face up")]
    AlreadyFaceUp,
    #[error("card is already matched")]
    AlreadyMatched,
    #[error("waiting for a mismatched pair to turn back over")]
    AwaitingReveal,
}

/// Outcome of selecting a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionResult {
    /// First card of a pair turned face-up.
    Flipped { card: CardId, symbol: Symbol },

    /// Second card matched the first. The player keeps the turn.
    /// `outcome` is set when this match finished the game.
    Matched {
        player: PlayerId,
        cards: [CardId; 2],
        symbol: Symbol,
        outcome: Option<GameResult>,
    },

    /// Second card did not match. Both stay face-up until the reveal
    /// delay elapses, then the turn passes.
    Mismatched { player: PlayerId, cards: [CardId; 2] },

    /// Selection ignored; nothing changed.
    Rejected(Rejection),
}

impl SelectionResult {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, SelectionResult::Rejected(_))
    }

    /// True when this selection completed a two-card attempt.
    #[must_use]
    pub fn completes_move(&self) -> bool {
        matches!(self, SelectionResult::Matched { .. } | SelectionResult::Mismatched { .. })
    }
}

/// Outcome of a reveal delay elapsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    /// The pair turned back face-down.
    pub cards: [CardId; 2],
    /// Player whose turn it now is.
    pub next_player: PlayerId,
}

/// A completed two-card attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub number: u32,
    pub player: PlayerId,
    pub cards: [CardId; 2],
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_move() {
        let flipped = SelectionResult::Flipped { card: CardId(0), symbol: Symbol(0) };
        let matched = SelectionResult::Matched {
            player: PlayerId::ONE,
            cards: [CardId(0), CardId(1)],
            symbol: Symbol(0),
            outcome: None,
        };
        let rejected = SelectionResult::Rejected(Rejection::OutOfRange);

        assert!(!flipped.completes_move());
        assert!(matched.completes_move());
        assert!(!rejected.completes_move());
        assert!(rejected.is_rejected());
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(Rejection::AlreadyMatched.to_string(), "card is already matched");
        assert_eq!(Rejection::NotInProgress.to_string(), "game is not in progress");
    }
}
