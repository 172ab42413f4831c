//! Station coordinator
//!
//! Owns the four simulated sensors, a clock, and the RNG that drives them,
//! and folds each read cycle into a single
//! [`MeasurementRecord`](aeromon_core::MeasurementRecord). A sensor fault
//! never aborts the cycle; the affected fields fall back to zero so the
//! record stays complete for downstream classification.

use aeromon_core::{Clock, MeasurementRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::sensors::{Dht22, GuvaS12sd, Mq131, Pms5003, Readout, SensorStatus, SimulatedSensor};

/// Coordinator for the simulated sensor rig
pub struct Station<C: Clock> {
    clock: C,
    rng: StdRng,
    particle: Pms5003,
    ozone: Mq131,
    climate: Dht22,
    uv: GuvaS12sd,
}

impl<C: Clock> Station<C> {
    /// Create a station with entropy-seeded randomness
    pub fn new(clock: C) -> Self {
        Self::from_rng(clock, StdRng::from_entropy())
    }

    /// Create a station with a fixed seed, for reproducible runs
    pub fn with_seed(clock: C, seed: u64) -> Self {
        Self::from_rng(clock, StdRng::seed_from_u64(seed))
    }

    fn from_rng(clock: C, rng: StdRng) -> Self {
        Self {
            clock,
            rng,
            particle: Pms5003::new(),
            ozone: Mq131::new(),
            climate: Dht22::new(),
            uv: GuvaS12sd::new(),
        }
    }

    /// Sample every sensor and assemble one measurement record
    ///
    /// Faulted sensors are logged and contribute zero for their fields,
    /// keeping the record total for the classifier.
    pub fn read_all(&mut self) -> MeasurementRecord {
        let timestamp = self.clock.now();
        let mut record = MeasurementRecord {
            timestamp,
            pm2_5: 0.0,
            pm10: 0.0,
            ozone: 0.0,
            uv_index: 0.0,
            temperature: 0.0,
            humidity: 0.0,
        };

        let sensors: [&mut dyn SimulatedSensor; 4] = [
            &mut self.particle,
            &mut self.ozone,
            &mut self.climate,
            &mut self.uv,
        ];

        for sensor in sensors {
            match sensor.sample(&mut self.rng, timestamp) {
                Ok(Readout::Particulate { pm2_5, pm10 }) => {
                    record.pm2_5 = pm2_5;
                    record.pm10 = pm10;
                }
                Ok(Readout::Ozone { ppb }) => record.ozone = ppb,
                Ok(Readout::Climate {
                    temperature,
                    humidity,
                }) => {
                    record.temperature = temperature;
                    record.humidity = humidity;
                }
                Ok(Readout::Uv { index }) => record.uv_index = index,
                Err(err) => log::warn!("sensor read failed, defaulting to zero: {}", err),
            }
        }

        record
    }

    /// Current status of each sensor, in read order
    pub fn statuses(&self) -> [(&'static str, SensorStatus); 4] {
        [
            (self.particle.name(), self.particle.status()),
            (self.ozone.name(), self.ozone.status()),
            (self.climate.name(), self.climate.status()),
            (self.uv.name(), self.uv.status()),
        ]
    }

    /// Inject a fault into the particle counter
    pub fn fault_particle(&mut self, reason: &'static str) {
        self.particle.inject_fault(reason);
    }

    /// Inject a fault into the ozone sensor
    pub fn fault_ozone(&mut self, reason: &'static str) {
        self.ozone.inject_fault(reason);
    }

    /// Inject a fault into the climate sensor
    pub fn fault_climate(&mut self, reason: &'static str) {
        self.climate.inject_fault(reason);
    }

    /// Inject a fault into the UV sensor
    pub fn fault_uv(&mut self, reason: &'static str) {
        self.uv.inject_fault(reason);
    }

    /// Clear every injected fault
    pub fn clear_faults(&mut self) {
        self.particle.clear_fault();
        self.ozone.clear_fault();
        self.climate.clear_fault();
        self.uv.clear_fault();
    }

    /// Access the station clock
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeromon_core::time::ManualClock;

    #[test]
    fn read_all_fills_every_field() {
        let mut station = Station::with_seed(ManualClock::new(1_000), 1);
        let record = station.read_all();

        assert_eq!(record.timestamp, 1_000);
        assert!(record.pm2_5 > 0.0);
        assert!(record.pm10 > record.pm2_5);
        assert!(record.ozone > 0.0);
        assert!(record.uv_index >= 1.0);
        assert!(record.temperature >= 20.0);
        assert!(record.humidity >= 40.0);
    }

    #[test]
    fn seeded_stations_agree() {
        let mut a = Station::with_seed(ManualClock::new(0), 99);
        let mut b = Station::with_seed(ManualClock::new(0), 99);
        assert_eq!(a.read_all(), b.read_all());
    }

    #[test]
    fn faulted_sensor_defaults_to_zero() {
        let mut station = Station::with_seed(ManualClock::new(0), 5);
        station.fault_ozone("heater open circuit");

        let record = station.read_all();
        assert_eq!(record.ozone, 0.0);
        assert!(record.pm2_5 > 0.0, "other sensors keep reporting");

        let statuses = station.statuses();
        assert_eq!(statuses[1], ("MQ-131", SensorStatus::Faulted));
        assert_eq!(statuses[0].1, SensorStatus::Active);
    }

    #[test]
    fn clearing_faults_restores_readings() {
        let mut station = Station::with_seed(ManualClock::new(0), 5);
        station.fault_uv("photodiode saturated");
        assert_eq!(station.read_all().uv_index, 0.0);

        station.clear_faults();
        assert!(station.read_all().uv_index >= 1.0);
    }
}
