//! The session state machine.
//!
//! A `Session` owns one game from deal to final score. It is driven by
//! three inputs: `select_card`, `conclude_reveal` (the mismatch reveal delay
//! has elapsed) and `tick` (wall time advanced).
//!
//! ## Selection states
//!
//! - **Idle** (0 or 1 pending): a face-down card may be flipped.
//! - **Resolving** (2 pending): a mismatched pair is showing; every selection
//!   is rejected until `conclude_reveal` turns it back and passes the turn.
//!
//! A matching pair resolves immediately and the player keeps the turn.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::{CardId, CardView, Deck, SymbolPool};
use crate::core::{GameError, GameRng, GridConfig, PlayerId, PlayerMap};
use crate::rules::resolver::{self, PairOutcome};
use crate::rules::{GameResult, MoveRecord, Rejection, RevealOutcome, SelectionResult};

use super::snapshot::SessionSnapshot;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No game dealt yet: the player is choosing a grid size.
    #[default]
    Configuring,
    InProgress,
    Finished,
}

/// One game of memory between two players.
#[derive(Clone, Debug)]
pub struct Session {
    grid: GridConfig,
    deck: Deck,
    current_player: PlayerId,
    scores: PlayerMap<u32>,
    /// Face-up cards not yet resolved, in selection order.
    pending: SmallVec<[CardId; 2]>,
    move_count: u32,
    elapsed_ms: u64,
    status: Status,
    history: Vector<MoveRecord>,
    result: Option<GameResult>,
}

impl Session {
    /// Deal a shuffled deck for `grid` and start play with player 1.
    #[must_use]
    pub fn start(grid: GridConfig, pool: &SymbolPool, rng: &mut GameRng) -> Self {
        let deck = Deck::build(grid.pair_count(), pool, rng);
        Self::from_parts(grid, deck)
    }

    /// Start play on a pre-arranged deck.
    ///
    /// The deck must hold exactly `grid.card_count()` cards.
    pub fn with_deck(grid: GridConfig, deck: Deck) -> Result<Self, GameError> {
        if deck.len() != grid.card_count() {
            return Err(GameError::InvalidConfiguration {
                rows: grid.rows(),
                cols: grid.cols(),
                reason: "deck size does not match the grid",
            });
        }
        Ok(Self::from_parts(grid, deck))
    }

    fn from_parts(grid: GridConfig, deck: Deck) -> Self {
        info!(rows = grid.rows(), cols = grid.cols(), "session started");
        Self {
            grid,
            deck,
            current_player: PlayerId::ONE,
            scores: PlayerMap::default(),
            pending: SmallVec::new(),
            move_count: 0,
            elapsed_ms: 0,
            status: Status::InProgress,
            history: Vector::new(),
            result: None,
        }
    }

    // === Inputs ===

    /// Select the card at `id`.
    ///
    /// Invalid selections change nothing and come back as
    /// `SelectionResult::Rejected`.
    pub fn select_card(&mut self, id: CardId) -> SelectionResult {
        match self.try_select(id) {
            Ok(result) => result,
            Err(reason) => {
                debug!(card = id.0, %reason, "selection rejected");
                SelectionResult::Rejected(reason)
            }
        }
    }

    fn try_select(&mut self, id: CardId) -> Result<SelectionResult, Rejection> {
        if self.status != Status::InProgress {
            return Err(Rejection::NotInProgress);
        }
        if self.is_resolving() {
            return Err(Rejection::AwaitingReveal);
        }

        let symbol = resolver::flip_up(&mut self.deck, id)?;
        self.pending.push(id);
        debug!(card = id.0, player = self.current_player.number(), "card flipped");

        if self.pending.len() < 2 {
            return Ok(SelectionResult::Flipped { card: id, symbol });
        }

        let cards = [self.pending[0], self.pending[1]];
        Ok(self.resolve(cards))
    }

    fn resolve(&mut self, cards: [CardId; 2]) -> SelectionResult {
        self.move_count += 1;
        let player = self.current_player;

        match resolver::resolve_pair(&mut self.deck, cards) {
            PairOutcome::Match(symbol) => {
                self.scores[player] += 1;
                self.pending.clear();
                self.record(player, cards, true);
                debug!(player = player.number(), score = self.scores[player], "pair matched");

                let outcome = self.deck.all_matched().then(|| self.finish());
                SelectionResult::Matched {
                    player,
                    cards,
                    symbol,
                    outcome,
                }
            }
            PairOutcome::Mismatch => {
                self.record(player, cards, false);
                debug!(player = player.number(), "pair mismatched");
                SelectionResult::Mismatched { player, cards }
            }
        }
    }

    fn finish(&mut self) -> GameResult {
        let result = GameResult::from_scores(&self.scores);
        self.status = Status::Finished;
        self.result = Some(result);
        info!(
            player_one = self.scores[PlayerId::ONE],
            player_two = self.scores[PlayerId::TWO],
            moves = self.move_count,
            %result,
            "session finished"
        );
        result
    }

    fn record(&mut self, player: PlayerId, cards: [CardId; 2], matched: bool) {
        self.history.push_back(MoveRecord {
            number: self.move_count,
            player,
            cards,
            matched,
        });
    }

    /// Turn a showing mismatch back over and pass the turn.
    ///
    /// Returns `None` when no mismatch is showing.
    pub fn conclude_reveal(&mut self) -> Option<RevealOutcome> {
        if self.status != Status::InProgress || !self.is_resolving() {
            return None;
        }

        let cards = [self.pending[0], self.pending[1]];
        resolver::turn_back(&mut self.deck, cards);
        self.pending.clear();
        self.current_player = self.current_player.other();
        debug!(next = self.current_player.number(), "mismatch turned back");

        Some(RevealOutcome {
            cards,
            next_player: self.current_player,
        })
    }

    /// Advance the session clock. Stops counting once the game is over.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.status == Status::InProgress {
            self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        }
    }

    // === Queries ===

    #[must_use]
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Face-up cards awaiting resolution.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// True while a mismatched pair is showing.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.pending.len() == 2
    }

    /// Every completed two-card attempt, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Final result, once finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.deck.matched_count()
    }

    /// Public view of one card. Face-down symbols are never exposed.
    #[must_use]
    pub fn card_view(&self, id: CardId) -> Option<CardView> {
        self.deck.get(id).map(|c| c.view())
    }

    /// Public views of every card in grid order.
    pub fn card_views(&self) -> impl Iterator<Item = CardView> + '_ {
        self.deck.iter().map(|c| c.view())
    }

    /// Serializable picture of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::of(self)
    }
}
