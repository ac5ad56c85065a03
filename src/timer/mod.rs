//! Cancellable delays for the mismatch reveal.

pub mod scheduler;
pub mod manual;

pub use scheduler::{Scheduler, TimerHandle};
pub use manual::ManualScheduler;
