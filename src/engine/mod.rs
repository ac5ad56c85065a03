//! The game engine facade consumed by the presentation layer.
//!
//! `MemoryGame` turns input events (grid chosen, card clicked, restart,
//! timer fired, tick) into session transitions and `GameEvent`
//! notifications. It owns the only mutable session; hosts never touch the
//! `Session` directly.

mod game;

pub use game::MemoryGame;
