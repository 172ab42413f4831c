//! PMS5003 particle counter simulator
//!
//! The Plantower PMS5003 reports both particulate fractions from one laser
//! scatter chamber, so the simulator emits PM2.5 and PM10 together with a
//! realistic mass ratio between them.

use aeromon_core::Timestamp;
use rand::{Rng, RngCore};

use super::{Readout, SensorError, SensorStatus, SimulatedSensor};

/// Simulated Plantower PMS5003 laser particle counter
pub struct Pms5003 {
    status: SensorStatus,
    fault: Option<&'static str>,
}

impl Pms5003 {
    const NAME: &'static str = "PMS5003";

    /// PM2.5 simulation range (µg/m³)
    ///
    /// Sweeps the Good through Very Unhealthy bands so demo gauges move.
    const PM25_RANGE: core::ops::Range<f32> = 10.0..110.0;

    /// PM10/PM2.5 mass ratio range
    ///
    /// Coarse mass includes the fine fraction; urban ratios run 1.3-2.2.
    const PM10_RATIO_RANGE: core::ops::Range<f32> = 1.3..2.2;

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

impl Default for Pms5003 {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSensor for Pms5003 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Laser particle counter (PM2.5 / PM10)"
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

        let pm2_5 = rng.gen_range(Self::PM25_RANGE);
        let pm10 = pm2_5 * rng.gen_range(Self::PM10_RATIO_RANGE);

        self.status = SensorStatus::Active;
        Ok(Readout::Particulate { pm2_5, pm10 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn readings_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sensor = Pms5003::new();

        for _ in 0..100 {
            match sensor.sample(&mut rng, 0).unwrap() {
                Readout::Particulate { pm2_5, pm10 } => {
                    assert!(Pms5003::PM25_RANGE.contains(&pm2_5));
                    assert!(pm10 >= pm2_5, "coarse mass includes the fine fraction");
                }
                other => panic!("unexpected readout: {:?}", other),
            }
        }
        assert_eq!(sensor.status(), SensorStatus::Active);
    }

    #[test]
    fn fault_round_trip() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut sensor = Pms5003::new();

        sensor.inject_fault("fan stalled");
        let err = sensor.sample(&mut rng, 0).unwrap_err();
        assert_eq!(
            err,
            SensorError::Fault {
                sensor: "PMS5003",
                reason: "fan stalled"
            }
        );
        assert_eq!(sensor.status(), SensorStatus::Faulted);

        sensor.clear_fault();
        assert!(sensor.sample(&mut rng, 0).is_ok());
        assert_eq!(sensor.status(), SensorStatus::Active);
    }
}
