//! Deck construction and shuffling.
//!
//! A deck of `2 * pairs` cards is dealt from a symbol pool, each symbol
//! duplicated, then shuffled with Fisher–Yates. Card ids are assigned after
//! the shuffle, so `CardId(i)` is the `i`-th grid position.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::symbol::{Symbol, SymbolPool};
use crate::core::GameRng;

/// Ordered board of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal and shuffle `pair_count` pairs from `pool`.
    ///
    /// Pairs beyond the pool size reuse symbols cyclically.
    ///
    /// ```
    /// use memory_match::cards::{Deck, SymbolPool};
    /// use memory_match::core::GameRng;
    ///
    /// let deck = Deck::build(8, &SymbolPool::default(), &mut GameRng::new(42));
    /// assert_eq!(deck.len(), 16);
    /// assert!(deck.is_well_paired());
    /// ```
    #[must_use]
    pub fn build(pair_count: usize, pool: &SymbolPool, rng: &mut GameRng) -> Self {
        let mut symbols: Vec<Symbol> = (0..pair_count).map(|i| pool.symbol_for_pair(i)).collect();
        symbols.extend_from_within(..);
        rng.shuffle(&mut symbols);
        Self::from_symbols(symbols)
    }

    /// Lay out cards in exactly the given order, without shuffling.
    #[must_use]
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardId(i as u32), symbol))
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Iterate over cards in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Symbols in grid order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cards.iter().map(|c| c.symbol)
    }

    /// How many cards carry each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// True when every symbol present is carried by exactly two cards.
    ///
    /// Fails for decks dealt from a pool smaller than the pair count.
    #[must_use]
    pub fn is_well_paired(&self) -> bool {
        self.symbol_counts().values().all(|&n| n == 2)
    }

    /// Number of cards in the `Matched` state.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// True when every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardState;

    #[test]
    fn test_build_sizes() {
        let pool = SymbolPool::default();
        let mut rng = GameRng::new(1);

        for pairs in [1, 2, 8, 50] {
            let deck = Deck::build(pairs, &pool, &mut rng);
            assert_eq!(deck.len(), pairs * 2);
            assert_eq!(deck.symbol_counts().len(), pairs);
            assert!(deck.is_well_paired());
            assert!(deck.iter().all(|c| c.state == CardState::FaceDown));
        }
    }

    #[test]
    fn test_ids_follow_grid_order() {
        let deck = Deck::build(6, &SymbolPool::default(), &mut GameRng::new(5));
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id, CardId(i as u32));
            assert_eq!(deck.get(card.id), Some(card));
        }
        assert!(deck.get(CardId(12)).is_none());
    }

    #[test]
    fn test_same_seed_same_deck() {
        let pool = SymbolPool::default();
        let a = Deck::build(10, &pool, &mut GameRng::new(99));
        let b = Deck::build(10, &pool, &mut GameRng::new(99));
        let c = Deck::build(10, &pool, &mut GameRng::new(100));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_small_pool_reuses_symbols() {
        let pool = SymbolPool::new(["cat.png", "dog.png"]).unwrap();
        let deck = Deck::build(3, &pool, &mut GameRng::new(0));

        let counts = deck.symbol_counts();
        assert_eq!(deck.len(), 6);
        assert_eq!(counts[&Symbol(0)], 4);
        assert_eq!(counts[&Symbol(1)], 2);
        assert!(!deck.is_well_paired());
    }

    #[test]
    fn test_from_symbols_keeps_order() {
        let deck = Deck::from_symbols([Symbol(0), Symbol(1), Symbol(0), Symbol(1)]);
        let symbols: Vec<_> = deck.symbols().collect();
        assert_eq!(symbols, vec![Symbol(0), Symbol(1), Symbol(0), Symbol(1)]);
        assert_eq!(deck.matched_count(), 0);
        assert!(!deck.all_matched());
    }
}
