//! Change notifications sent to the presentation layer.
//!
//! The engine never draws anything. After every state change it emits one
//! or more `GameEvent`s and the renderer updates from them.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardState, Symbol};
use crate::core::{PlayerId, PlayerMap};
use crate::rules::GameResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new deal is on the board, every card face-down.
    SessionStarted { rows: u8, cols: u8 },

    /// A card changed state. `symbol` is `None` when it turned face-down.
    CardStateChanged {
        card: CardId,
        state: CardState,
        symbol: Option<Symbol>,
    },

    /// It is now this player's turn.
    TurnChanged(PlayerId),

    ScoreChanged(PlayerMap<u32>),

    MoveCountChanged(u32),

    /// Every pair has been matched.
    GameFinished {
        scores: PlayerMap<u32>,
        result: GameResult,
    },
}

impl GameEvent {
    /// Short name for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::SessionStarted { .. } => "session_started",
            GameEvent::CardStateChanged { .. } => "card_state_changed",
            GameEvent::TurnChanged(_) => "turn_changed",
            GameEvent::ScoreChanged(_) => "score_changed",
            GameEvent::MoveCountChanged(_) => "move_count_changed",
            GameEvent::GameFinished { .. } => "game_finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(GameEvent::TurnChanged(PlayerId::TWO).kind(), "turn_changed");
        assert_eq!(GameEvent::MoveCountChanged(3).kind(), "move_count_changed");
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::GameFinished {
            scores: PlayerMap::new(|p| u32::from(p.number())),
            result: GameResult::Winner(PlayerId::TWO),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
