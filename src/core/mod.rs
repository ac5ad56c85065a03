//! Core engine types: players, RNG, configuration, errors.
//!
//! Everything here is independent of cards and rules.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{GridConfig, SessionConfig, DEFAULT_REVEAL_DELAY_MS, MAX_DIMENSION, MIN_DIMENSION};
pub use error::GameError;
