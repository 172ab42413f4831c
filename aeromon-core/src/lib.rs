//! Core classification engine for AeroMon
//!
//! Maps raw environmental measurements (PM2.5, PM10, ozone, UV index) to
//! qualitative air-quality categories via static, table-driven threshold
//! scales. The engine is pure and total: every finite value and every
//! parameter kind resolves to a defined category.
//!
//! Key constraints:
//! - No allocation in the classification path
//! - `no_std` capable for embedded display boards
//! - Referentially transparent: safe to call from any number of threads
//!
//! ```
//! use aeromon_core::{classify, ParameterKind};
//!
//! let result = classify(8.5, ParameterKind::Pm25);
//! assert_eq!(result.label, "Good");
//!
//! // Unrecognized kinds never fail; they resolve to the generic category.
//! let result = classify(42.0, ParameterKind::Custom(7));
//! assert_eq!(result.label, "Normal");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod history;
pub mod params;
pub mod record;
pub mod scale;
pub mod time;

// Public API
pub use params::ParameterKind;
pub use record::MeasurementRecord;
pub use scale::{classify, scale_for, Category, Classification, ColorToken, Scale, Severity};
pub use time::{Clock, Timestamp};

/// Crate version string, useful for connector handshakes and logs.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
