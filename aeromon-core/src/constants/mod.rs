//! Constants for AeroMon Core
//!
//! Centralized, documented numeric tables used by the classification engine
//! and its display collaborators. All breakpoints and category definitions
//! live here; the rest of the crate never embeds magic numbers.
//!
//! ## Organization
//!
//! - **Breakpoints**: per-parameter threshold tables (upper-inclusive bounds)
//! - **Categories**: the fixed category ladders each scale maps onto
//! - **Gauges**: full-scale display values for circular/bar gauges

/// Per-parameter classification breakpoints.
pub mod breakpoints;

/// Category ladders (labels, colors, severity ranks).
pub mod categories;

/// Full-scale gauge values used by rendering collaborators.
pub mod gauges;

// Re-export the tables most callers want
pub use breakpoints::{
    OZONE_BREAKPOINTS_PPB, PM10_BREAKPOINTS_UGM3, PM25_BREAKPOINTS_UGM3, UV_BREAKPOINTS_INDEX,
};
pub use categories::{GENERIC_CATEGORIES, POLLUTANT_CATEGORIES, UV_CATEGORIES};
