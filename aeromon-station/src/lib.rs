//! Simulated monitoring station for AeroMon
//!
//! Stands in for the physical sensor rig during development and demos. Four
//! mock sensors (particulate, ozone, climate, UV) produce plausible random
//! readings; a [`Station`] coordinates them into
//! [`MeasurementRecord`](aeromon_core::MeasurementRecord)s and a [`Sampler`]
//! drives the fixed-interval refresh the dashboard expects.
//!
//! Nothing here touches the classifier's behavior: the station only supplies
//! the values the presentation layer later classifies and renders.
//!
//! ```
//! use aeromon_core::time::ManualClock;
//! use aeromon_station::Station;
//!
//! let mut station = Station::with_seed(ManualClock::new(0), 7);
//! let record = station.read_all();
//! assert!(record.pm2_5 >= 0.0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod sampler;
pub mod sensors;
pub mod station;

pub use sampler::Sampler;
pub use sensors::{Readout, SensorError, SensorStatus, SimulatedSensor};
pub use station::Station;
