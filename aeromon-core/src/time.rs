//! Time sources for stamping measurement records
//!
//! The classifier itself is timeless; clocks exist so the station can stamp
//! records and so tests can drive history buffers deterministically.

/// Timestamp in milliseconds since the Unix epoch (or test origin)
pub type Timestamp = u64;

/// Source of timestamps for records and histories
pub trait Clock {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Whether this clock tracks wall time (vs a test or monotonic origin)
    fn is_wall_clock(&self) -> bool;
}

/// Wall clock backed by the operating system
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Hand-driven clock for tests and replay
#[derive(Debug, Clone)]
pub struct ManualClock {
    timestamp: Timestamp,
}

impl ManualClock {
    /// Create a clock frozen at the given timestamp
    pub const fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance by the given number of milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}
