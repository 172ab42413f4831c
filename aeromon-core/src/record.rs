//! Measurement Records
//!
//! One record per station tick, carrying every parameter the dashboard
//! renders. Records are plain data: the classifier derives categories from
//! them on demand and nothing here is cached or stored.

use crate::constants::breakpoints::{OZONE_BREAKPOINTS_PPB, PM25_BREAKPOINTS_UGM3};
use crate::params::ParameterKind;
use crate::scale::{classify, Classification};
use crate::time::Timestamp;

/// Full set of readings captured at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementRecord {
    /// Capture time in milliseconds
    pub timestamp: Timestamp,
    /// Fine particulates (µg/m³)
    pub pm2_5: f32,
    /// Coarse particulates (µg/m³)
    pub pm10: f32,
    /// Ground-level ozone (ppb)
    pub ozone: f32,
    /// UV index (dimensionless)
    pub uv_index: f32,
    /// Air temperature (°C)
    pub temperature: f32,
    /// Relative humidity (%)
    pub humidity: f32,
}

impl MeasurementRecord {
    /// The air-quality kinds a record classifies, in display order.
    pub const AIR_QUALITY_KINDS: [ParameterKind; 4] = [
        ParameterKind::Pm25,
        ParameterKind::Pm10,
        ParameterKind::Ozone,
        ParameterKind::Uv,
    ];

    /// Value of the given parameter within this record
    pub fn value(&self, kind: ParameterKind) -> Option<f32> {
        match kind {
            ParameterKind::Pm25 => Some(self.pm2_5),
            ParameterKind::Pm10 => Some(self.pm10),
            ParameterKind::Ozone => Some(self.ozone),
            ParameterKind::Uv => Some(self.uv_index),
            ParameterKind::Temperature => Some(self.temperature),
            ParameterKind::Humidity => Some(self.humidity),
            ParameterKind::Custom(_) => None,
        }
    }

    /// Classify every air-quality parameter in this record
    ///
    /// Order matches [`Self::AIR_QUALITY_KINDS`].
    pub fn classify_all(&self) -> [(ParameterKind, Classification); 4] {
        Self::AIR_QUALITY_KINDS.map(|kind| {
            // Every air-quality kind has a field on the record
            let value = self.value(kind).unwrap_or(0.0);
            (kind, classify(value, kind))
        })
    }

    /// The most severe pollutant classification in this record
    ///
    /// Drives the overall air-quality badge. UV is excluded: it rides a
    /// separate exposure scale and gets its own badge.
    pub fn dominant(&self) -> Classification {
        let candidates = [
            classify(self.pm2_5, ParameterKind::Pm25),
            classify(self.pm10, ParameterKind::Pm10),
            classify(self.ozone, ParameterKind::Ozone),
        ];

        // Ties keep the earlier (display-order) parameter's classification;
        // labels and colors agree at equal severity anyway.
        let mut worst = candidates[0];
        for candidate in &candidates[1..] {
            if candidate.severity > worst.severity {
                worst = *candidate;
            }
        }
        worst
    }

    /// Dashboard summary number on a 0..=100 scale
    ///
    /// The source dashboards averaged the PM2.5 gauge with a rescaled ozone
    /// gauge, with per-view drift in the arithmetic; this is the canonical
    /// form. Each pollutant is projected onto 0..=100 against its top
    /// classification breakpoint, then the two are averaged and rounded.
    pub fn composite_index(&self) -> u16 {
        let pm = Self::sub_index(self.pm2_5, PM25_BREAKPOINTS_UGM3[4]);
        let ozone = Self::sub_index(self.ozone, OZONE_BREAKPOINTS_PPB[4]);
        libm::roundf((pm + ozone) / 2.0) as u16
    }

    /// Project a pollutant value onto 0..=100 against its full-scale bound
    fn sub_index(value: f32, full_scale: f32) -> f32 {
        (value / full_scale).clamp(0.0, 1.0) * 100.0
    }
}
