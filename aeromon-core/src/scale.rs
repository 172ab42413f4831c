//! Threshold Scales and the Classifier
//!
//! ## Overview
//!
//! A [`Scale`] pairs an ascending breakpoint table with the category ladder
//! it cuts the real line into. Classification is a linear scan: the first
//! breakpoint greater than or equal to the value selects the interval, so
//! boundaries are inclusive on the lower-severity side. Tables are small
//! (four to five bounds) so a scan beats a binary search on every target we
//! care about; either strategy must preserve the tie-break rule.
//!
//! ## Totality
//!
//! [`classify`] never fails. Every finite input lands in an interval, values
//! above the last breakpoint take the most severe category, and kinds with
//! no dedicated scale (temperature, humidity, custom channels) resolve to
//! the single generic category. Non-finite inputs follow the scan: negative
//! infinity takes the least severe category, positive infinity and NaN the
//! most severe (every `value <= bound` comparison is false for NaN).
//!
//! ## Statelessness
//!
//! Scales are `'static` data and the classifier takes no context, so calls
//! are referentially transparent and need no coordination between threads.

use crate::constants::{
    GENERIC_CATEGORIES, OZONE_BREAKPOINTS_PPB, PM10_BREAKPOINTS_UGM3, PM25_BREAKPOINTS_UGM3,
    POLLUTANT_CATEGORIES, UV_BREAKPOINTS_INDEX, UV_CATEGORIES,
};
use crate::params::ParameterKind;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    // Consume the arguments so bindings used only for logging stay used
    ($($arg:tt)*) => {
        let _ = ($($arg)*);
    };
}

/// Severity rank within a scale: 0 is least severe, ascending.
pub type Severity = u8;

/// Display color token attached to a category
///
/// Semantic, not presentational: rendering layers own the mapping from
/// token to theme-specific swatch. Tokens depend only on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorToken {
    /// Clean / low exposure
    Green,
    /// Acceptable
    Yellow,
    /// Degraded
    Orange,
    /// Unhealthy
    Red,
    /// Severe
    Purple,
    /// Worst band on the pollutant ladder
    Maroon,
    /// Neutral, used by the generic category
    Blue,
}

impl ColorToken {
    /// Stable string form of the token
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Green => "green",
            ColorToken::Yellow => "yellow",
            ColorToken::Orange => "orange",
            ColorToken::Red => "red",
            ColorToken::Purple => "purple",
            ColorToken::Maroon => "maroon",
            ColorToken::Blue => "blue",
        }
    }
}

/// One step of a category ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Badge text shown next to the gauge
    pub label: &'static str,
    /// Display color token
    pub color: ColorToken,
    /// Rank within the ladder, 0 = least severe
    pub severity: Severity,
}

impl Category {
    /// Classification result carrying this category's fields
    pub const fn classification(&self) -> Classification {
        Classification {
            label: self.label,
            color: self.color,
            severity: self.severity,
        }
    }
}

/// Result of classifying a single measurement
///
/// Derived on every call and never stored; callers keep the raw value and
/// re-classify when they need the category again. Serializable for log
/// shipping, but deliberately not deserializable: results are always derived
/// fresh from a value and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classification {
    /// Badge text for this category
    pub label: &'static str,
    /// Display color token
    pub color: ColorToken,
    /// Severity rank within the kind's ladder
    pub severity: Severity,
}

/// Ordered threshold table over a category ladder
///
/// ## Invariants
///
/// - `categories.len() == breakpoints.len() + 1` (checked at construction)
/// - breakpoints strictly increasing (checked by table tests)
/// - category severities non-decreasing along the ladder
pub struct Scale {
    /// Ascending upper-inclusive interval bounds
    breakpoints: &'static [f32],
    /// One category per interval, lowest severity first
    categories: &'static [Category],
}

impl Scale {
    /// Build a scale over a breakpoint table and its ladder
    ///
    /// Panics at compile time (for the built-in statics) or at first use if
    /// the ladder does not have exactly one more step than the table has
    /// bounds.
    pub const fn new(breakpoints: &'static [f32], categories: &'static [Category]) -> Self {
        assert!(categories.len() == breakpoints.len() + 1);
        Self {
            breakpoints,
            categories,
        }
    }

    /// Classify a value against this scale
    ///
    /// First interval whose bound satisfies `value <= bound` wins; anything
    /// above the last bound takes the final (most severe) category.
    pub fn classify(&self, value: f32) -> Classification {
        for (idx, bound) in self.breakpoints.iter().enumerate() {
            if value <= *bound {
                return self.categories[idx].classification();
            }
        }
        self.categories[self.breakpoints.len()].classification()
    }

    /// The breakpoint table backing this scale
    pub const fn breakpoints(&self) -> &'static [f32] {
        self.breakpoints
    }

    /// The category ladder backing this scale
    pub const fn categories(&self) -> &'static [Category] {
        self.categories
    }
}

/// PM2.5 scale: EPA-derived breakpoints over the pollutant ladder.
pub static PM25_SCALE: Scale = Scale::new(&PM25_BREAKPOINTS_UGM3, &POLLUTANT_CATEGORIES);

/// PM10 scale: same ladder, coarse-particulate bounds.
pub static PM10_SCALE: Scale = Scale::new(&PM10_BREAKPOINTS_UGM3, &POLLUTANT_CATEGORIES);

/// Ozone scale: same ladder, 8-hour ozone bounds.
pub static OZONE_SCALE: Scale = Scale::new(&OZONE_BREAKPOINTS_PPB, &POLLUTANT_CATEGORIES);

/// UV index scale: WHO bands, Low through Extreme.
pub static UV_SCALE: Scale = Scale::new(&UV_BREAKPOINTS_INDEX, &UV_CATEGORIES);

/// Fallback scale for kinds without air-quality semantics.
pub static GENERIC_SCALE: Scale = Scale::new(&[], &GENERIC_CATEGORIES);

/// Select the scale for a parameter kind
///
/// Total: kinds without a dedicated scale get [`GENERIC_SCALE`].
pub fn scale_for(kind: ParameterKind) -> &'static Scale {
    match kind {
        ParameterKind::Pm25 => &PM25_SCALE,
        ParameterKind::Pm10 => &PM10_SCALE,
        ParameterKind::Ozone => &OZONE_SCALE,
        ParameterKind::Uv => &UV_SCALE,
        ParameterKind::Temperature | ParameterKind::Humidity => &GENERIC_SCALE,
        ParameterKind::Custom(id) => {
            log_debug!("classifying custom channel {} on the generic scale", id);
            &GENERIC_SCALE
        }
    }
}

/// Classify a measurement
///
/// Pure, total, side-effect free. See the module docs for boundary and
/// non-finite semantics.
pub fn classify(value: f32, kind: ParameterKind) -> Classification {
    scale_for(kind).classify(value)
}
