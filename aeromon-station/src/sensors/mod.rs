//! Mock Sensor Suite
//!
//! One module per simulated device, mirroring the hardware the original rig
//! carried:
//!
//! - `pms5003` - laser particle counter (PM2.5 + PM10)
//! - `mq131` - ozone cell
//! - `dht22` - temperature / relative-humidity probe
//! - `guva_s12sd` - UV photodiode, reported as a UV index
//!
//! Each sensor draws from a fixed plausible range so demo dashboards sweep
//! the interesting classification bands. Faults are injectable: a faulted
//! sensor returns an error from `sample` until cleared, which the station
//! absorbs the same way the real rig would (log, zero the field, mark the
//! sensor).

use aeromon_core::Timestamp;
use rand::RngCore;
use thiserror::Error;

mod dht22;
mod guva_s12sd;
mod mq131;
mod pms5003;

pub use dht22::Dht22;
pub use guva_s12sd::GuvaS12sd;
pub use mq131::Mq131;
pub use pms5003::Pms5003;

/// Sensor failure modes
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The device refused to produce a reading
    #[error("sensor '{sensor}' fault: {reason}")]
    Fault {
        /// Device name, e.g. "PMS5003"
        sensor: &'static str,
        /// Short cause, e.g. "fan stalled"
        reason: &'static str,
    },
}

/// Lifecycle state reported alongside readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorStatus {
    /// Never sampled yet
    Idle,
    /// Last sample succeeded
    Active,
    /// Last sample failed
    Faulted,
}

/// One successful sample from a mock device
///
/// Variants carry exactly the fields the device reports; the station maps
/// them into a flat record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Readout {
    /// Particle counter output (µg/m³)
    Particulate {
        /// Fine fraction
        pm2_5: f32,
        /// Coarse fraction, always at least the fine fraction
        pm10: f32,
    },
    /// Ozone concentration (ppb)
    Ozone {
        /// Measured concentration
        ppb: f32,
    },
    /// Combined climate probe output
    Climate {
        /// Air temperature (°C)
        temperature: f32,
        /// Relative humidity (%)
        humidity: f32,
    },
    /// UV exposure
    Uv {
        /// WHO UV index
        index: f32,
    },
}

/// Interface every mock device implements
///
/// `sample` takes the RNG by trait object so the station owns a single
/// seedable generator and tests stay deterministic.
pub trait SimulatedSensor {
    /// Device name as printed on the module
    fn name(&self) -> &'static str;

    /// One-line description for status listings
    fn description(&self) -> &'static str;

    /// Current lifecycle state
    fn status(&self) -> SensorStatus;

    /// Produce one reading at the given timestamp
    fn sample(&mut self, rng: &mut dyn RngCore, timestamp: Timestamp)
        -> Result<Readout, SensorError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn all_sensors_start_idle() {
        let sensors: [&dyn SimulatedSensor; 4] = [
            &Pms5003::new(),
            &Mq131::new(),
            &Dht22::new(),
            &GuvaS12sd::new(),
        ];
        for sensor in sensors {
            assert_eq!(sensor.status(), SensorStatus::Idle, "{}", sensor.name());
            assert!(!sensor.description().is_empty());
        }
    }

    #[test]
    fn sampling_activates() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sensor = Mq131::new();
        sensor.sample(&mut rng, 0).unwrap();
        assert_eq!(sensor.status(), SensorStatus::Active);
    }
}
