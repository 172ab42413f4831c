//! Gauge Full-Scale Values
//!
//! Display collaborators render each parameter on a circular or bar gauge;
//! these constants fix the full-scale value of each gauge so that the needle
//! position `value / full_scale` is consistent across views. The classifier
//! itself never reads them.

/// PM2.5 gauge full scale (µg/m³).
///
/// Chosen so the Unhealthy band sits past the three-quarter mark.
pub const PM25_GAUGE_FULL_SCALE: f32 = 100.0;

/// PM10 gauge full scale (µg/m³).
pub const PM10_GAUGE_FULL_SCALE: f32 = 400.0;

/// Ozone gauge full scale (ppb table units).
///
/// Slightly above the top classification breakpoint so Hazardous readings
/// still move the needle.
pub const OZONE_GAUGE_FULL_SCALE: f32 = 0.125;

/// UV index gauge full scale.
///
/// The WHO index card tops out at 11+.
pub const UV_GAUGE_FULL_SCALE: f32 = 11.0;

/// Temperature gauge full scale (°C).
pub const TEMPERATURE_GAUGE_FULL_SCALE: f32 = 50.0;

/// Relative humidity gauge full scale (%).
pub const HUMIDITY_GAUGE_FULL_SCALE: f32 = 100.0;
