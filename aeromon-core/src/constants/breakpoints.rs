//! Classification Breakpoints per Parameter
//!
//! Each table is a strictly increasing sequence of upper-inclusive interval
//! bounds. A value `v` belongs to the first interval whose bound satisfies
//! `v <= bound`; values above the last bound belong to the open top interval.
//! Ties therefore always resolve to the lower-severity side.
//!
//! Tables are fixed at compile time and shared by every caller; changing a
//! bound here changes the category every gauge and badge displays.

/// PM2.5 breakpoints (µg/m³).
///
/// Bounds the six pollutant categories Excellent through Hazardous.
/// The upper four values follow the US EPA PM2.5 AQI breakpoints; the
/// 6/12 µg/m³ split subdivides the EPA "Good" band so indoor deployments
/// can distinguish genuinely clean air.
///
/// Source: EPA AQI technical assistance document; WHO 2021 guideline
/// (annual PM2.5 ≤ 5 µg/m³) motivates the Excellent band.
pub const PM25_BREAKPOINTS_UGM3: [f32; 5] = [6.0, 12.0, 35.4, 55.4, 150.4];

/// PM10 breakpoints (µg/m³).
///
/// Same six-category ladder as PM2.5. Coarse particulates are tolerated at
/// roughly 2-4x the fine-particulate mass before reaching the same band.
///
/// Source: EPA AQI PM10 breakpoints, Good band subdivided at 27 µg/m³
/// (half of the 54 µg/m³ EPA bound).
pub const PM10_BREAKPOINTS_UGM3: [f32; 5] = [27.0, 54.0, 154.0, 254.0, 354.0];

/// Ground-level ozone breakpoints (ppb).
///
/// Same six-category ladder as the particulate tables.
///
/// Source: EPA 8-hour ozone AQI breakpoints (0.054/0.070/0.085/0.105),
/// Good band subdivided at 0.027.
pub const OZONE_BREAKPOINTS_PPB: [f32; 5] = [0.027, 0.054, 0.070, 0.085, 0.105];

/// UV index breakpoints (dimensionless WHO UV index).
///
/// Bounds the five-category UV ladder Low through Extreme. The WHO scale
/// marks Extreme at indices above 10; the trailing 11 bound is retained so
/// the table matches the published index card (both top intervals carry the
/// Extreme category).
///
/// Source: WHO Global Solar UV Index (2002).
pub const UV_BREAKPOINTS_INDEX: [f32; 5] = [2.0, 5.0, 7.0, 10.0, 11.0];

#[cfg(test)]
mod tests {
    use super::*;

    fn strictly_increasing(table: &[f32]) -> bool {
        table.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn tables_strictly_increasing() {
        assert!(strictly_increasing(&PM25_BREAKPOINTS_UGM3));
        assert!(strictly_increasing(&PM10_BREAKPOINTS_UGM3));
        assert!(strictly_increasing(&OZONE_BREAKPOINTS_PPB));
        assert!(strictly_increasing(&UV_BREAKPOINTS_INDEX));
    }
}
