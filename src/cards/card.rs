//! Card state model.
//!
//! A card starts `FaceDown`, is flipped `FaceUp` when selected, and either
//! turns back `FaceDown` after a mismatch or becomes `Matched` for good.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Stable grid position of a card, `0..card_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the grid index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Lifecycle state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    FaceDown,
    FaceUp,
    Matched,
}

impl CardState {
    /// Whether the face is shown.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, CardState::FaceUp | CardState::Matched)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            state: CardState::FaceDown,
        }
    }

    /// Only face-down cards can be selected.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.state == CardState::FaceDown
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Public view of the card. The symbol is withheld while face-down.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView {
            id: self.id,
            state: self.state,
            symbol: self.state.is_visible().then_some(self.symbol),
        }
    }
}

/// What a caller may know about a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub state: CardState,
    /// `None` while the card is face-down.
    pub symbol: Option<Symbol>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(CardId::new(3), Symbol(1));
        assert_eq!(card.state, CardState::FaceDown);
        assert!(card.is_selectable());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_view_hides_face_down_symbol() {
        let mut card = Card::new(CardId::new(0), Symbol(4));
        assert_eq!(card.view().symbol, None);

        card.state = CardState::FaceUp;
        assert_eq!(card.view().symbol, Some(Symbol(4)));
        assert!(!card.is_selectable());

        card.state = CardState::Matched;
        assert_eq!(card.view().symbol, Some(Symbol(4)));
        assert!(card.is_matched());
    }

    #[test]
    fn test_view_serialization_keeps_symbol_hidden() {
        let card = Card::new(CardId::new(2), Symbol(7));
        let json = serde_json::to_string(&card.view()).unwrap();
        assert!(json.contains("\"symbol\":null"));
    }
}
