//! Serializable board picture for renderers.
//!
//! Built only from `CardView`s, so face-down symbols never appear.

use serde::{Deserialize, Serialize};

use super::session::{Session, Status};
use crate::cards::CardView;
use crate::core::{PlayerId, PlayerMap};
use crate::rules::GameResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Cards in grid order (row-major).
    pub cards: Vec<CardView>,
    pub current_player: PlayerId,
    pub scores: PlayerMap<u32>,
    pub move_count: u32,
    pub elapsed_ms: u64,
    pub status: Status,
    pub result: Option<GameResult>,
}

impl SessionSnapshot {
    pub(crate) fn of(session: &Session) -> Self {
        let grid = session.grid();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cards: session.card_views().collect(),
            current_player: session.current_player(),
            scores: *session.scores(),
            move_count: session.move_count(),
            elapsed_ms: session.elapsed_ms(),
            status: session.status(),
            result: session.result(),
        }
    }

    /// Cards of one grid row.
    #[must_use]
    pub fn row(&self, row: u8) -> &[CardView] {
        let cols = usize::from(self.cols);
        let start = usize::from(row) * cols;
        self.cards.get(start..start + cols).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardState, Deck, Symbol};
    use crate::core::GridConfig;

    fn session() -> Session {
        let grid = GridConfig::new(2, 3).unwrap();
        let deck = Deck::from_symbols([0, 1, 2, 0, 1, 2].map(Symbol));
        Session::with_deck(grid, deck).unwrap()
    }

    #[test]
    fn test_snapshot_hides_face_down() {
        let mut session = session();
        session.select_card(CardId(4));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.cards.len(), 6);
        assert_eq!(snapshot.cards[4].symbol, Some(Symbol(1)));
        assert_eq!(snapshot.cards.iter().filter(|c| c.symbol.is_some()).count(), 1);
        assert_eq!(snapshot.status, Status::InProgress);
    }

    #[test]
    fn test_rows() {
        let snapshot = session().snapshot();
        let second: Vec<_> = snapshot.row(1).iter().map(|c| c.id).collect();
        assert_eq!(second, vec![CardId(3), CardId(4), CardId(5)]);
        assert!(snapshot.row(2).is_empty());
        assert!(snapshot.row(0).iter().all(|c| c.state == CardState::FaceDown));
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = session().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
