//! Measurement parameter kinds
//!
//! Each kind selects a classification scale and carries display metadata
//! (name, unit). Kinds without an air-quality scale (temperature, humidity,
//! custom channels) are still valid classifier inputs and resolve to the
//! generic category.

/// Measurement parameter enumeration
///
/// Maps to a specific classification scale and display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterKind {
    /// Fine particulate matter, aerodynamic diameter below 2.5 µm
    Pm25,
    /// Coarse particulate matter, aerodynamic diameter below 10 µm
    Pm10,
    /// Ground-level ozone concentration
    Ozone,
    /// UV radiation index (dimensionless, WHO scale)
    Uv,
    /// Ambient air temperature
    Temperature,
    /// Relative humidity
    Humidity,
    /// Deployment-specific channel with no built-in scale
    Custom(u8),
}

impl ParameterKind {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            ParameterKind::Pm25 => "pm2.5",
            ParameterKind::Pm10 => "pm10",
            ParameterKind::Ozone => "ozone",
            ParameterKind::Uv => "uv",
            ParameterKind::Temperature => "temperature",
            ParameterKind::Humidity => "humidity",
            ParameterKind::Custom(_) => "custom",
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            ParameterKind::Pm25 => "µg/m³",
            ParameterKind::Pm10 => "µg/m³",
            ParameterKind::Ozone => "ppb",
            ParameterKind::Uv => "UVI",
            ParameterKind::Temperature => "°C",
            ParameterKind::Humidity => "%",
            ParameterKind::Custom(_) => "",
        }
    }

    /// Whether this kind has a dedicated air-quality scale
    ///
    /// Kinds without one classify onto the single generic category.
    pub const fn has_scale(&self) -> bool {
        matches!(
            self,
            ParameterKind::Pm25 | ParameterKind::Pm10 | ParameterKind::Ozone | ParameterKind::Uv
        )
    }

    /// Dead band for trend detection, in the kind's own unit
    ///
    /// Changes smaller than this are reported as
    /// [`Trend::Stable`](crate::history::Trend::Stable): gauge needles should
    /// not flicker on noise.
    pub const fn trend_dead_band(&self) -> f32 {
        match self {
            ParameterKind::Pm25 | ParameterKind::Pm10 => 2.0,
            ParameterKind::Ozone => 0.005,
            ParameterKind::Uv => 0.5,
            ParameterKind::Temperature => 0.5,
            ParameterKind::Humidity => 2.0,
            ParameterKind::Custom(_) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_units() {
        assert_eq!(ParameterKind::Pm25.name(), "pm2.5");
        assert_eq!(ParameterKind::Pm25.unit(), "µg/m³");
        assert_eq!(ParameterKind::Uv.unit(), "UVI");
        assert_eq!(ParameterKind::Custom(3).unit(), "");
    }

    #[test]
    fn scale_membership() {
        assert!(ParameterKind::Pm10.has_scale());
        assert!(ParameterKind::Ozone.has_scale());
        assert!(!ParameterKind::Temperature.has_scale());
        assert!(!ParameterKind::Custom(0).has_scale());
    }
}
