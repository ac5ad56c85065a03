//! Delay scheduling interface.
//!
//! The engine never blocks. To wait out a mismatch it asks a `Scheduler`
//! for a timer and gets back a `TimerHandle`; when the host sees that timer
//! fire it hands the handle back to the engine. Handles from cancelled or
//! superseded timers are ignored.

use serde::{Deserialize, Serialize};

/// Identifies one scheduled delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Host-provided timer facility.
pub trait Scheduler {
    /// Arrange for a timer to fire after `delay_ms`.
    fn schedule(&mut self, delay_ms: u64) -> TimerHandle;

    /// Cancel a timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}
