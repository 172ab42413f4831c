//! Fixed-Size Reading History and Trend Detection
//!
//! ## Overview
//!
//! The dashboard's historical bar chart and the per-gauge trend arrows need
//! a sliding window of recent values. This module provides a circular (ring)
//! buffer with a compile-time capacity: O(1) insertion that overwrites the
//! oldest entry when full, O(1) access to the newest, zero allocation.
//!
//! The classifier never reads history; trend is display metadata computed
//! beside the category badge, not an input to it.
//!
//! ## Capacity
//!
//! `N` is a const generic. The modulo in `push` compiles to a bit mask when
//! `N` is a power of two, so prefer 8, 16, 32.
//!
//! ## Usage
//!
//! ```
//! use aeromon_core::history::{ReadingHistory, TimestampedValue, Trend};
//! use aeromon_core::ParameterKind;
//!
//! let mut history: ReadingHistory<8> = ReadingHistory::new();
//! history.push(TimestampedValue { value: 18.0, timestamp: 1000 });
//! history.push(TimestampedValue { value: 30.0, timestamp: 6000 });
//!
//! let trend = history.trend(ParameterKind::Pm25.trend_dead_band());
//! assert_eq!(trend, Trend::Rising);
//! ```

use crate::time::Timestamp;

/// Single value with its capture time
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimestampedValue {
    /// Measured value in the parameter's own unit
    pub value: f32,
    /// Capture timestamp in milliseconds
    pub timestamp: Timestamp,
}

/// Direction of recent change for a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trend {
    /// Newest reading sits above the window mean by more than the dead band
    Rising,
    /// Newest reading sits below the window mean by more than the dead band
    Falling,
    /// Within the dead band, or not enough history to tell
    Stable,
}

/// Fixed-capacity ring buffer of timestamped readings
///
/// ## Invariants
///
/// - `write_pos < N`
/// - `len <= N`
/// - iteration yields entries oldest first
#[derive(Clone)]
pub struct ReadingHistory<const N: usize> {
    /// Storage; `None` marks never-written slots
    data: [Option<TimestampedValue>; N],
    /// Next write index, wraps at N
    write_pos: usize,
    /// Number of valid entries, saturates at N
    len: usize,
}

impl<const N: usize> ReadingHistory<N> {
    /// Create an empty history
    ///
    /// Const, so histories can live in statics.
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Append a reading, overwriting the oldest when full
    pub fn push(&mut self, reading: TimestampedValue) {
        self.data[self.write_pos] = Some(reading);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Number of stored readings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the history is at capacity
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Most recent reading
    pub fn last(&self) -> Option<&TimestampedValue> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 {
            N - 1
        } else {
            self.write_pos - 1
        };

        self.data[idx].as_ref()
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> HistoryIter<'_, N> {
        HistoryIter {
            history: self,
            index: 0,
        }
    }

    /// Drop all readings
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Direction of recent change
    ///
    /// Compares the newest reading against the mean of the whole window.
    /// Differences within `dead_band` report [`Trend::Stable`], as does a
    /// window with fewer than two readings. Dead bands per kind come from
    /// [`ParameterKind::trend_dead_band`](crate::ParameterKind::trend_dead_band).
    pub fn trend(&self, dead_band: f32) -> Trend {
        if self.len < 2 {
            return Trend::Stable;
        }

        // self.len >= 2, so last() is always Some here
        let Some(newest) = self.last() else {
            return Trend::Stable;
        };

        let sum: f32 = self.iter().map(|r| r.value).sum();
        let mean = sum / self.len as f32;
        let delta = newest.value - mean;

        if delta > dead_band {
            Trend::Rising
        } else if delta < -dead_band {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }

    /// Reading by logical index (0 = oldest)
    ///
    /// When full, the oldest entry sits at `write_pos`; logical indices are
    /// offset from there and wrapped.
    fn get(&self, index: usize) -> Option<&TimestampedValue> {
        if index >= self.len {
            return None;
        }

        let actual = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual].as_ref()
    }
}

impl<const N: usize> Default for ReadingHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over history contents, oldest first
pub struct HistoryIter<'a, const N: usize> {
    history: &'a ReadingHistory<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for HistoryIter<'a, N> {
    type Item = &'a TimestampedValue;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.history.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}
