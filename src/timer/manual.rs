//! Deterministic scheduler driven by the host.
//!
//! Time only moves when `advance` is called. Useful for tests and for
//! hosts that already own a frame or tick loop.

use tracing::trace;

use super::scheduler::{Scheduler, TimerHandle};

#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_handle: u64,
    /// (due time, handle), unordered.
    pending: Vec<(u64, TimerHandle)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|&(_, h)| h == handle)
    }

    /// Move the clock forward and return the timers that came due, earliest
    /// first. Timers due at the same instant fire in scheduling order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<TimerHandle> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;

        let mut due: Vec<(u64, TimerHandle)> = Vec::new();
        self.pending.retain(|&entry| {
            if entry.0 <= now {
                due.push(entry);
                false
            } else {
                true
            }
        });
        due.sort_unstable();
        due.into_iter().map(|(_, handle)| handle).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u64) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.pending.push((due, handle));
        trace!(%handle, due, "timer scheduled");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(_, h)| h != handle);
        trace!(%handle, "timer cancelled");
    }
}
