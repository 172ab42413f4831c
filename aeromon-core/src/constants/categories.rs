//! Category Ladders
//!
//! The fixed, ordered category sets each scale maps onto. Severity ranks are
//! dense and ascending within a ladder; the color token is a function of the
//! category alone, never of the raw measurement.

use crate::scale::{Category, ColorToken};

/// Six-step pollutant ladder shared by PM2.5, PM10, and ozone.
///
/// One entry per interval cut by the five pollutant breakpoints.
pub const POLLUTANT_CATEGORIES: [Category; 6] = [
    Category {
        label: "Excellent",
        color: ColorToken::Green,
        severity: 0,
    },
    Category {
        label: "Good",
        color: ColorToken::Yellow,
        severity: 1,
    },
    Category {
        label: "Poor",
        color: ColorToken::Orange,
        severity: 2,
    },
    Category {
        label: "Unhealthy",
        color: ColorToken::Red,
        severity: 3,
    },
    Category {
        label: "Very Unhealthy",
        color: ColorToken::Purple,
        severity: 4,
    },
    Category {
        label: "Hazardous",
        color: ColorToken::Maroon,
        severity: 5,
    },
];

/// Five-step UV ladder over six intervals.
///
/// The UV breakpoint table keeps the published index-11 bound, so the two
/// top intervals (10, 11] and (11, +inf) both carry Extreme. Severity stays
/// non-decreasing across every boundary.
pub const UV_CATEGORIES: [Category; 6] = [
    Category {
        label: "Low",
        color: ColorToken::Green,
        severity: 0,
    },
    Category {
        label: "Moderate",
        color: ColorToken::Yellow,
        severity: 1,
    },
    Category {
        label: "High",
        color: ColorToken::Orange,
        severity: 2,
    },
    Category {
        label: "Very High",
        color: ColorToken::Red,
        severity: 3,
    },
    Category {
        label: "Extreme",
        color: ColorToken::Purple,
        severity: 4,
    },
    Category {
        label: "Extreme",
        color: ColorToken::Purple,
        severity: 4,
    },
];

/// Single-step ladder for kinds without an air-quality scale.
///
/// Temperature, humidity, and custom channels resolve here; the classifier
/// never fails on an unrecognized kind.
pub const GENERIC_CATEGORIES: [Category; 1] = [Category {
    label: "Normal",
    color: ColorToken::Blue,
    severity: 0,
}];

#[cfg(test)]
mod tests {
    use super::*;

    fn severities_non_decreasing(ladder: &[Category]) -> bool {
        ladder.windows(2).all(|w| w[0].severity <= w[1].severity)
    }

    #[test]
    fn ladders_ordered() {
        assert!(severities_non_decreasing(&POLLUTANT_CATEGORIES));
        assert!(severities_non_decreasing(&UV_CATEGORIES));
    }

    #[test]
    fn pollutant_ladder_strict() {
        // The pollutant ladder must be strictly increasing; only the UV
        // ladder duplicates its top step.
        assert!(POLLUTANT_CATEGORIES
            .windows(2)
            .all(|w| w[0].severity < w[1].severity));
    }
}
