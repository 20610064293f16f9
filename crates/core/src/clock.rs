//! Gravity clock
//!
//! The engine never runs a timer itself. A host feeds elapsed time into a
//! `DropClock` and sends one `tick()` to the session per tick it reports.
//! After a `LevelChanged` event the host calls `set_interval`.

/// Fixed-interval accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl DropClock {
    /// Create a clock; intervals below 1ms are raised to 1ms
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Change the interval. Time already accumulated carries over.
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
    }

    /// Add elapsed time and return how many ticks are due
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }

    /// Drop accumulated time (e.g. after resume or restart)
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
