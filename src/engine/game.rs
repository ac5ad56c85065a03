//! Top-level orchestrator.

use tracing::{debug, info};

use crate::cards::{CardId, CardState, Deck, SymbolPool};
use crate::core::{GameError, GameRng, GridConfig, PlayerId, SessionConfig};
use crate::events::{GameEvent, Observer};
use crate::rules::{Rejection, RevealOutcome, SelectionResult};
use crate::session::{Session, Status};
use crate::timer::{ManualScheduler, Scheduler, TimerHandle};

/// A memory game as seen by the presentation layer.
///
/// Owns at most one `Session` at a time, the RNG that deals its decks, the
/// scheduler used for mismatch reveals, and the observer that receives
/// every change notification.
pub struct MemoryGame<S, O> {
    config: SessionConfig,
    pool: SymbolPool,
    rng: GameRng,
    scheduler: S,
    observer: O,
    session: Option<Session>,
    /// Timer for the mismatch currently showing, if any.
    reveal_timer: Option<TimerHandle>,
}

impl<S: Scheduler, O: Observer> MemoryGame<S, O> {
    /// Create an engine in the `Configuring` state.
    pub fn new(config: SessionConfig, scheduler: S, observer: O) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            config,
            pool: SymbolPool::default(),
            rng,
            scheduler,
            observer,
            session: None,
            reveal_timer: None,
        }
    }

    /// Deal from a custom symbol pool instead of the default animals.
    #[must_use]
    pub fn with_symbol_pool(mut self, pool: SymbolPool) -> Self {
        self.pool = pool;
        self
    }

    // === Input events ===

    /// Validate the grid and deal a new game. Any running game is discarded.
    pub fn on_start_game(&mut self, rows: u8, cols: u8) -> Result<&Session, GameError> {
        let grid = GridConfig::new(rows, cols)?;
        let session = Session::start(grid, &self.pool, &mut self.rng.fork());
        Ok(self.begin(session))
    }

    /// Start a game on a pre-arranged deck.
    pub fn start_with_deck(&mut self, grid: GridConfig, deck: Deck) -> Result<&Session, GameError> {
        let session = Session::with_deck(grid, deck)?;
        Ok(self.begin(session))
    }

    /// Re-deal the current grid with a fresh shuffle.
    ///
    /// Cancels any pending mismatch reveal and resets scores, moves, clock
    /// and turn.
    pub fn on_restart(&mut self) -> Result<&Session, GameError> {
        let grid = self.session.as_ref().ok_or(GameError::NoSession)?.grid();
        info!(rows = grid.rows(), cols = grid.cols(), "restarting session");
        let session = Session::start(grid, &self.pool, &mut self.rng.fork());
        Ok(self.begin(session))
    }

    /// Drop the current game and go back to choosing a grid size.
    pub fn dispose(&mut self) {
        self.cancel_reveal();
        if self.session.take().is_some() {
            info!("session disposed");
        }
    }

    /// A card was clicked.
    pub fn on_card_selected(&mut self, card: CardId) -> SelectionResult {
        let Some(session) = self.session.as_mut() else {
            debug!(card = card.0, "selection with no session");
            return SelectionResult::Rejected(Rejection::NotInProgress);
        };

        let result = session.select_card(card);
        let moves = session.move_count();
        let scores = *session.scores();

        match result {
            SelectionResult::Flipped { card, symbol } => {
                self.emit(GameEvent::CardStateChanged {
                    card,
                    state: CardState::FaceUp,
                    symbol: Some(symbol),
                });
            }
            SelectionResult::Matched {
                cards,
                symbol,
                outcome,
                ..
            } => {
                for card in cards {
                    self.emit(GameEvent::CardStateChanged {
                        card,
                        state: CardState::Matched,
                        symbol: Some(symbol),
                    });
                }
                self.emit(GameEvent::MoveCountChanged(moves));
                self.emit(GameEvent::ScoreChanged(scores));
                if let Some(result) = outcome {
                    self.emit(GameEvent::GameFinished { scores, result });
                }
            }
            SelectionResult::Mismatched { cards: [_, second], .. } => {
                let symbol = self
                    .session
                    .as_ref()
                    .and_then(|s| s.card_view(second))
                    .and_then(|v| v.symbol);
                self.emit(GameEvent::CardStateChanged {
                    card: second,
                    state: CardState::FaceUp,
                    symbol,
                });
                self.emit(GameEvent::MoveCountChanged(moves));
                self.reveal_timer = Some(self.scheduler.schedule(self.config.reveal_delay_ms));
            }
            SelectionResult::Rejected(_) => {}
        }
        result
    }

    /// A timer handed out by the scheduler has fired.
    ///
    /// Only the timer for the mismatch currently showing has any effect.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> Option<RevealOutcome> {
        if self.reveal_timer != Some(handle) {
            debug!(%handle, "stale timer ignored");
            return None;
        }
        self.reveal_timer = None;

        let outcome = self.session.as_mut()?.conclude_reveal()?;
        for card in outcome.cards {
            self.emit(GameEvent::CardStateChanged {
                card,
                state: CardState::FaceDown,
                symbol: None,
            });
        }
        self.emit(GameEvent::TurnChanged(outcome.next_player));
        Some(outcome)
    }

    /// Wall time advanced.
    pub fn on_tick(&mut self, elapsed_ms: u64) {
        if let Some(session) = self.session.as_mut() {
            session.tick(elapsed_ms);
        }
    }

    // === Queries ===

    /// `Configuring` until a game is dealt.
    #[must_use]
    pub fn status(&self) -> Status {
        self.session.as_ref().map_or(Status::Configuring, Session::status)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn symbol_pool(&self) -> &SymbolPool {
        &self.pool
    }

    /// Handle of the reveal timer currently running.
    #[must_use]
    pub fn reveal_timer(&self) -> Option<TimerHandle> {
        self.reveal_timer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    // === Internals ===

    fn begin(&mut self, session: Session) -> &Session {
        self.cancel_reveal();
        let grid = session.grid();

        self.emit(GameEvent::SessionStarted {
            rows: grid.rows(),
            cols: grid.cols(),
        });
        self.emit(GameEvent::ScoreChanged(*session.scores()));
        self.emit(GameEvent::MoveCountChanged(0));
        self.emit(GameEvent::TurnChanged(PlayerId::ONE));

        self.session.insert(session)
    }

    fn cancel_reveal(&mut self) {
        if let Some(handle) = self.reveal_timer.take() {
            self.scheduler.cancel(handle);
            debug!(%handle, "reveal cancelled");
        }
    }

    fn emit(&mut self, event: GameEvent) {
        debug!(kind = event.kind(), "event");
        self.observer.notify(&event);
    }
}

impl<O: Observer> MemoryGame<ManualScheduler, O> {
    /// Advance the manual clock: ticks the session and fires any reveal that
    /// came due.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<RevealOutcome> {
        let due = self.scheduler.advance(elapsed_ms);
        self.on_tick(elapsed_ms);
        due.into_iter()
            .filter_map(|handle| self.on_timer_fired(handle))
            .collect()
    }
}
