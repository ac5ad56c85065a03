//! # memory-match
//!
//! Rules engine for a two-player memory (card-matching) game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never draws, clicks or waits.
//!    Renderers subscribe to `GameEvent`s; input layers call `on_*` methods.
//!
//! 2. **Hidden Information**: A face-down card's symbol never leaves the
//!    engine. Callers only ever see `CardView`s.
//!
//! 3. **Explicit Time**: The mismatch reveal is a cancellable timer handed
//!    out by a host `Scheduler`, not a blocking sleep.
//!
//! ## Game Flow
//!
//! - Choose a grid (2..=10 per side, even card count) and deal.
//! - Players take turns flipping two cards. A match scores a point and the
//!   player goes again; a mismatch shows for the reveal delay, turns back
//!   over, and passes the turn.
//! - When every pair is matched the higher score wins; equal scores tie.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Symbols, cards, deck construction and shuffle
//! - `rules`: Flip/match resolution, selection outcomes, game result
//! - `session`: The per-game state machine and its public snapshot
//! - `events`: Change notifications and observers
//! - `timer`: Reveal-delay scheduling
//! - `engine`: `MemoryGame`, the input/output facade
//!
//! ## Example
//!
//! ```
//! use memory_match::{CardId, EventLog, ManualScheduler, MemoryGame, SessionConfig, Status};
//!
//! let config = SessionConfig::default().with_seed(42);
//! let mut game = MemoryGame::new(config, ManualScheduler::new(), EventLog::new());
//!
//! game.on_start_game(4, 4).unwrap();
//! assert_eq!(game.status(), Status::InProgress);
//!
//! game.on_card_selected(CardId(0));
//! game.on_card_selected(CardId(1));
//! game.advance(1000); // lets a mismatch turn back over
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod session;
pub mod events;
pub mod timer;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GridConfig, PlayerId, PlayerMap, SessionConfig};

pub use crate::cards::{Card, CardId, CardState, CardView, Deck, Symbol, SymbolPool};

pub use crate::rules::{GameResult, MoveRecord, Rejection, RevealOutcome, SelectionResult};

pub use crate::session::{Session, SessionSnapshot, Status};

pub use crate::events::{EventLog, GameEvent, Observer};

pub use crate::timer::{ManualScheduler, Scheduler, TimerHandle};

pub use crate::engine::MemoryGame;
