//! Matching rules.
//!
//! - `resolver`: flip, compare and turn back cards on a deck
//! - `selection`: what a selection did, or why it was rejected
//! - `result`: winner or tie at the end of the game

pub mod resolver;
pub mod selection;
pub mod result;

pub use resolver::PairOutcome;
pub use selection::{MoveRecord, Rejection, RevealOutcome, SelectionResult};
pub use result::GameResult;
