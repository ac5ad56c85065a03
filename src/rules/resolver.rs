//! Card-level matching rules.
//!
//! These functions only touch the deck. Turn order, scoring and move
//! counting live in `Session`, which calls in here.

use crate::cards::{CardId, CardState, Deck, Symbol};

use super::selection::Rejection;

/// Result of comparing two face-up cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// Both cards are now `Matched`.
    Match(Symbol),
    /// Both cards are still `FaceUp`.
    Mismatch,
}

/// Check that a card exists and is face-down.
pub fn check_selectable(deck: &Deck, id: CardId) -> Result<(), Rejection> {
    let card = deck.get(id).ok_or(Rejection::OutOfRange)?;
    match card.state {
        CardState::FaceDown => Ok(()),
        CardState::FaceUp => Err(Rejection::AlreadyFaceUp),
        CardState::Matched => Err(Rejection::AlreadyMatched),
    }
}

/// Turn a face-down card face-up, returning its symbol.
pub fn flip_up(deck: &mut Deck, id: CardId) -> Result<Symbol, Rejection> {
    check_selectable(deck, id)?;
    let card = deck.get_mut(id).ok_or(Rejection::OutOfRange)?;
    card.state = CardState::FaceUp;
    Ok(card.symbol)
}

/// Compare two face-up cards, marking them matched when the symbols agree.
pub fn resolve_pair(deck: &mut Deck, [first, second]: [CardId; 2]) -> PairOutcome {
    let symbol_of = |id: CardId| deck.get(id).map(|c| c.symbol);
    let (a, b) = (symbol_of(first), symbol_of(second));
    debug_assert!(a.is_some() && b.is_some(), "pending cards must exist");

    match (a, b) {
        (Some(a), Some(b)) if a == b => {
            set_state(deck, [first, second], CardState::Matched);
            PairOutcome::Match(a)
        }
        _ => PairOutcome::Mismatch,
    }
}

/// Turn a mismatched pair back face-down.
pub fn turn_back(deck: &mut Deck, pair: [CardId; 2]) {
    set_state(deck, pair, CardState::FaceDown);
}

fn set_state(deck: &mut Deck, pair: [CardId; 2], state: CardState) {
    for id in pair {
        if let Some(card) = deck.get_mut(id) {
            card.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abab() -> Deck {
        Deck::from_symbols([Symbol(0), Symbol(1), Symbol(0), Symbol(1)])
    }

    #[test]
    fn test_flip_up() {
        let mut deck = abab();
        assert_eq!(flip_up(&mut deck, CardId(1)), Ok(Symbol(1)));
        assert_eq!(deck.get(CardId(1)).unwrap().state, CardState::FaceUp);
        assert_eq!(flip_up(&mut deck, CardId(1)), Err(Rejection::AlreadyFaceUp));
        assert_eq!(flip_up(&mut deck, CardId(4)), Err(Rejection::OutOfRange));
    }

    #[test]
    fn test_resolve_match() {
        let mut deck = abab();
        flip_up(&mut deck, CardId(0)).unwrap();
        flip_up(&mut deck, CardId(2)).unwrap();

        assert_eq!(resolve_pair(&mut deck, [CardId(0), CardId(2)]), PairOutcome::Match(Symbol(0)));
        assert_eq!(deck.matched_count(), 2);
        assert_eq!(check_selectable(&deck, CardId(0)), Err(Rejection::AlreadyMatched));
    }

    #[test]
    fn test_resolve_mismatch_then_turn_back() {
        let mut deck = abab();
        flip_up(&mut deck, CardId(0)).unwrap();
        flip_up(&mut deck, CardId(1)).unwrap();

        assert_eq!(resolve_pair(&mut deck, [CardId(0), CardId(1)]), PairOutcome::Mismatch);
        assert_eq!(deck.get(CardId(0)).unwrap().state, CardState::FaceUp);

        turn_back(&mut deck, [CardId(0), CardId(1)]);
        assert!(deck.iter().all(|c| c.state == CardState::FaceDown));
    }
}
