//! Fixed-interval sampling loop
//!
//! Drives a [`Station`] at the dashboard's refresh cadence and hands each
//! record to a callback. The interval is configurable so tests can run
//! with no sleeping at all.

use std::time::Duration;

use aeromon_core::{Clock, MeasurementRecord};

use crate::station::Station;

/// Periodic driver for a [`Station`]
#[derive(Debug, Clone)]
pub struct Sampler {
    interval: Duration,
}

impl Sampler {
    /// Default refresh cadence of the live dashboard
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

    /// Create a sampler with the default five-second interval
    pub fn new() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
        }
    }

    /// Create a sampler with a custom interval
    ///
    /// `Duration::ZERO` disables sleeping, which is what tests want.
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    /// Configured tick interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run a bounded number of ticks, invoking `on_record` for each
    pub fn run_ticks<C, F>(&self, station: &mut Station<C>, ticks: usize, mut on_record: F)
    where
        C: Clock,
        F: FnMut(MeasurementRecord),
    {
        for tick in 0..ticks {
            let record = station.read_all();
            log::info!(
                "tick {}: pm2.5={:.1} ozone={:.3} uv={:.0}",
                tick,
                record.pm2_5,
                record.ozone,
                record.uv_index
            );
            on_record(record);

            // No point sleeping after the final tick.
            if tick + 1 < ticks && !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }
    }

    /// Run until the callback returns `false`
    pub fn run_until<C, F>(&self, station: &mut Station<C>, mut on_record: F)
    where
        C: Clock,
        F: FnMut(MeasurementRecord) -> bool,
    {
        loop {
            let record = station.read_all();
            if !on_record(record) {
                return;
            }
            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
