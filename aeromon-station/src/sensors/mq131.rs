//! MQ-131 ozone sensor simulator
//!
//! The MQ-131 is a metal-oxide gas sensor whose heater drifts, so real
//! deployments see the full span of the ozone scale over a day. The
//! simulator draws uniformly across that span.

use aeromon_core::Timestamp;
use rand::{Rng, RngCore};

use super::{Readout, SensorError, SensorStatus, SimulatedSensor};

/// Simulated Winsen MQ-131 ozone sensor
pub struct Mq131 {
    status: SensorStatus,
    fault: Option<&'static str>,
}

impl Mq131 {
    const NAME: &'static str = "MQ-131";

    /// Ozone simulation range (ppb), spanning every category band
    const OZONE_RANGE: core::ops::Range<f32> = 0.020..0.125;

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

impl Default for Mq131 {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSensor for Mq131 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Metal-oxide ozone sensor"
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

        let ppb = rng.gen_range(Self::OZONE_RANGE);
        self.status = SensorStatus::Active;
        Ok(Readout::Ozone { ppb })
    }
}
