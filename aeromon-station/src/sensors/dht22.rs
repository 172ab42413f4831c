//! DHT22 temperature and humidity simulator
//!
//! One-wire combined sensor, so temperature and relative humidity come
//! out of a single read.

use aeromon_core::Timestamp;
use rand::{Rng, RngCore};

use super::{Readout, SensorError, SensorStatus, SimulatedSensor};

/// Simulated Aosong DHT22 temperature/humidity sensor
pub struct Dht22 {
    status: SensorStatus,
    fault: Option<&'static str>,
}

impl Dht22 {
    const NAME: &'static str = "DHT22";

    /// Temperature simulation range (°C)
    const TEMPERATURE_RANGE: core::ops::Range<f32> = 20.0..35.0;

    /// Relative humidity simulation range (%)
    const HUMIDITY_RANGE: core::ops::Range<f32> = 40.0..80.0;

    /// Create an idle sensor
    pub fn new() -> Self {
        Self {
            status: SensorStatus::Idle,
            fault: None,
        }
    }

    /// Force every subsequent sample to fail with the given reason
    pub fn inject_fault(&mut self, reason: &'static str) {
        self.fault = Some(reason);
    }

    /// Clear an injected fault
    pub fn clear_fault(&mut self) {
        self.fault = None;
    }
}

impl Default for Dht22 {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSensor for Dht22 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Combined temperature and humidity sensor"
    }

    fn status(&self) -> SensorStatus {
        self.status
    }

    fn sample(
        &mut self,
        rng: &mut dyn RngCore,
        _timestamp: Timestamp,
    ) -> Result<Readout, SensorError> {
        if let Some(reason) = self.fault {
            self.status = SensorStatus::Faulted;
            return Err(SensorError::Fault {
                sensor: Self::NAME,
                reason,
            });
        }

        let temperature = rng.gen_range(Self::TEMPERATURE_RANGE);
        let humidity = rng.gen_range(Self::HUMIDITY_RANGE);

        self.status = SensorStatus::Active;
        Ok(Readout::Climate {
            temperature,
            humidity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn readings_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sensor = Dht22::new();

        for _ in 0..100 {
            match sensor.sample(&mut rng, 0).unwrap() {
                Readout::Climate {
                    temperature,
                    humidity,
                } => {
                    assert!(Dht22::TEMPERATURE_RANGE.contains(&temperature));
                    assert!(Dht22::HUMIDITY_RANGE.contains(&humidity));
                }
                other => panic!("unexpected readout: {:?}", other),
            }
        }
    }

    #[test]
    fn fault_blocks_sampling() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut sensor = Dht22::new();
        sensor.inject_fault("checksum mismatch");
        assert!(sensor.sample(&mut rng, 0).is_err());
        assert_eq!(sensor.status(), SensorStatus::Faulted);
    }
}
