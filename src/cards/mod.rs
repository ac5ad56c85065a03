//! Cards, faces, and the deck.
//!
//! - `Symbol` / `SymbolPool`: card faces and their image assets
//! - `Card` / `CardState` / `CardView`: per-card state and its public view
//! - `Deck`: construction and Fisher–Yates shuffle

pub mod symbol;
pub mod card;
pub mod deck;

pub use symbol::{Symbol, SymbolPool, MAX_POOL_SIZE};
pub use card::{Card, CardId, CardState, CardView};
pub use deck::Deck;
