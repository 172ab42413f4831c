//! Backend connectors for AeroMon
//!
//! The dashboard can run against a live measurement backend instead of the
//! simulated station. This crate holds the client side of that integration:
//! an HTTP row source that polls the backend's measurement listing endpoint
//! and decodes its rows into values the classifier understands.
//!
//! Only HTTP is supported. The backend speaks a plain REST/JSON protocol,
//! and the dashboard's five-second poll cadence makes a persistent
//! connection pointless.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod http;

pub use http::{HttpConfig, HttpRowSource, MeasurementRow};

use thiserror::Error;

/// Errors shared by every connector
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Network-level failure after retries were exhausted
    #[error("Request failed: {0}")]
    Request(String),

    /// Server answered with a non-success HTTP status
    #[error("Server error {status}: {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, if the server sent one
        message: String,
    },

    /// Response body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Backend accepted the request but flagged it unsuccessful
    #[error("Backend rejected request: {0}")]
    Backend(String),

    /// Invalid connector configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Fetch statistics common to all connectors
#[derive(Debug, Default, Clone)]
pub struct SourceStats {
    /// Total fetches that returned rows
    pub fetches_ok: u64,
    /// Total fetches that failed after retries
    pub fetches_failed: u64,
    /// Total rows decoded across all fetches
    pub rows_decoded: u64,
    /// Last error message, if any fetch has failed
    pub last_error: Option<String>,
}
