//! GUVA-S12SD UV sensor simulator
//!
//! The analogue GUVA-S12SD photodiode is usually read through a coarse
//! voltage-to-index conversion, so the simulator produces whole UV
//! index steps rather than a continuous value.

use aeromon_core::Timestamp;
use rand::{Rng, RngCore};

use super::{Readout, SensorError, SensorStatus, SimulatedSensor};

/// Simulated GUVA-S12SD UV photodiode
pub struct GuvaS12sd {
    status: SensorStatus,
    fault: Option<&'static str>,
}

impl GuvaS12sd {
    const NAME: &'static str = "GUVA-S12SD";

    /// UV index simulation range (whole index steps)
    const UV_RANGE: core::ops::RangeInclusive<u8> = 1..=11;

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

impl Default for GuvaS12sd {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSensor for GuvaS12sd {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "UV photodiode (UV index)"
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

        let index = rng.gen_range(Self::UV_RANGE) as f32;
        self.status = SensorStatus::Active;
        Ok(Readout::Uv { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn readings_are_whole_index_steps() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sensor = GuvaS12sd::new();

        for _ in 0..100 {
            match sensor.sample(&mut rng, 0).unwrap() {
                Readout::Uv { index } => {
                    assert_eq!(index, index.trunc(), "index should be a whole step");
                    assert!((1.0..=11.0).contains(&index));
                }
                other => panic!("unexpected readout: {:?}", other),
            }
        }
    }

    #[test]
    fn fault_blocks_sampling() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut sensor = GuvaS12sd::new();
        sensor.inject_fault("photodiode saturated");
        assert!(sensor.sample(&mut rng, 0).is_err());
        assert_eq!(sensor.status(), SensorStatus::Faulted);
    }
}
