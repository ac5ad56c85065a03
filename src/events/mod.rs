//! Event-driven output interface.
//!
//! The engine emits `GameEvent`s to registered `Observer`s. Renderers,
//! score boards and end-of-game dialogs subscribe here instead of being
//! called directly from the rules.

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, Observer};
