//! HTTP row source
//!
//! Polls the measurement backend's listing endpoint and decodes its rows.
//! The backend wraps every response in a `{success, data, message}` envelope
//! and serializes each measurement as a positional array:
//!
//! ```text
//! [id, timestamp, pm2.5, ozone, uv index, temperature, humidity]
//! ```
//!
//! Transient failures (5xx, 429, transport errors) are retried with
//! exponential backoff; client errors are not. [`HttpRowSource::fetch_rows_or_empty`]
//! additionally downgrades any failure to an empty row set, matching the
//! dashboard's policy of showing stale data rather than crashing the
//! refresh loop.
//!
//! ## Example
//!
//! ```no_run
//! use aeromon_connectors::http::{HttpConfig, HttpRowSource};
//!
//! # fn example() -> Result<(), aeromon_connectors::ConnectorError> {
//! let config = HttpConfig::new("http://localhost:5000")
//!     .timeout_secs(10)
//!     .max_retries(2);
//! let source = HttpRowSource::new(config)?;
//!
//! for row in source.fetch_rows()? {
//!     println!("{}: pm2.5 = {}", row.timestamp, row.pm2_5);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use aeromon_core::{classify, Classification, ParameterKind};
use serde::Deserialize;

use crate::{ConnectorError, SourceStats};

/// Path of the measurement listing endpoint
const MEASUREMENTS_PATH: &str = "/mediciones";

/// HTTP row source configuration
#[derive(Clone)]
pub struct HttpConfig {
    /// Base URL of the backend
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Custom headers
    pub headers: HashMap<String, String>,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// User agent string
    pub user_agent: String,
}

impl HttpConfig {
    /// Create a new configuration with the backend's base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            headers: HashMap::new(),
            max_retries: 3,
            user_agent: format!("AeroMon/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the number of retries after the first attempt
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Add a custom header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Response envelope the backend wraps every payload in
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Vec<RawRow>,
    #[serde(default)]
    message: String,
}

/// One measurement row as the backend serializes it: a positional array
/// of `[id, timestamp, pm2.5, ozone, uv, temperature, humidity]`.
#[derive(Debug, Deserialize)]
struct RawRow(i64, String, f32, f32, f32, f32, f32);

/// Decoded measurement row
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    /// Backend row id
    pub id: i64,
    /// Backend timestamp, verbatim
    pub timestamp: String,
    /// Fine particulates (µg/m³)
    pub pm2_5: f32,
    /// Ground-level ozone (ppb)
    pub ozone: f32,
    /// UV index
    pub uv_index: f32,
    /// Air temperature (°C)
    pub temperature: f32,
    /// Relative humidity (%)
    pub humidity: f32,
}

impl From<RawRow> for MeasurementRow {
    fn from(raw: RawRow) -> Self {
        Self {
            id: raw.0,
            timestamp: raw.1,
            pm2_5: raw.2,
            ozone: raw.3,
            uv_index: raw.4,
            temperature: raw.5,
            humidity: raw.6,
        }
    }
}

impl MeasurementRow {
    /// Classify the row's air-quality parameters, in display order
    pub fn classify(&self) -> [(ParameterKind, Classification); 3] {
        [
            (ParameterKind::Pm25, classify(self.pm2_5, ParameterKind::Pm25)),
            (ParameterKind::Ozone, classify(self.ozone, ParameterKind::Ozone)),
            (ParameterKind::Uv, classify(self.uv_index, ParameterKind::Uv)),
        ]
    }
}

/// Synchronous HTTP row source backed by a pooled [`ureq::Agent`]
pub struct HttpRowSource {
    config: HttpConfig,
    agent: ureq::Agent,
    stats: Mutex<SourceStats>,
}

impl HttpRowSource {
    /// Create a row source, validating the configured base URL
    pub fn new(config: HttpConfig) -> Result<Self, ConnectorError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ConnectorError::Config(
                "Base URL must start with http:// or https://".into(),
            ));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self {
            config,
            agent,
            stats: Mutex::new(SourceStats::default()),
        })
    }

    /// Fetch all measurement rows from the backend
    pub fn fetch_rows(&self) -> Result<Vec<MeasurementRow>, ConnectorError> {
        let url = format!("{}{}", self.config.base_url, MEASUREMENTS_PATH);
        let body = self.execute_with_retry(&url)?;

        let envelope: Envelope = serde_json::from_str(&body)
            .map_err(|e| self.record_failure(ConnectorError::Decode(e.to_string())))?;

        if !envelope.success {
            return Err(self.record_failure(ConnectorError::Backend(envelope.message)));
        }

        let rows: Vec<MeasurementRow> =
            envelope.data.into_iter().map(MeasurementRow::from).collect();

        let mut stats = self.stats.lock().unwrap();
        stats.fetches_ok += 1;
        stats.rows_decoded += rows.len() as u64;
        Ok(rows)
    }

    /// Fetch rows, downgrading any failure to an empty row set
    ///
    /// The failure is logged; the refresh loop keeps rendering whatever it
    /// already has.
    pub fn fetch_rows_or_empty(&self) -> Vec<MeasurementRow> {
        match self.fetch_rows() {
            Ok(rows) => rows,
            Err(err) => {
                log::error!("measurement fetch failed, keeping stale data: {}", err);
                Vec::new()
            }
        }
    }

    /// Fetch statistics so far
    pub fn stats(&self) -> SourceStats {
        self.stats.lock().unwrap().clone()
    }

    fn record_failure(&self, err: ConnectorError) -> ConnectorError {
        let mut stats = self.stats.lock().unwrap();
        stats.fetches_failed += 1;
        stats.last_error = Some(err.to_string());
        err
    }

    fn build_request(&self, url: &str) -> ureq::Request {
        let mut request = self.agent.get(url).set("Accept", "application/json");
        for (name, value) in &self.config.headers {
            request = request.set(name, value);
        }
        request
    }

    /// Execute the request, retrying transient failures with backoff
    fn execute_with_retry(&self, url: &str) -> Result<String, ConnectorError> {
        let request = self.build_request(url);
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(100 * (1 << attempt));
                log::debug!("retrying fetch in {:?} (attempt {})", delay, attempt + 1);
                std::thread::sleep(delay);
            }

            match request.clone().call() {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| self.record_failure(ConnectorError::Request(e.to_string())));
                }
                Err(ureq::Error::Status(code, resp)) => {
                    let err = ConnectorError::ServerError {
                        status: code,
                        message: resp.into_string().unwrap_or_default(),
                    };
                    // 5xx and rate limiting are retryable; other client
                    // errors will not get better on their own.
                    if code >= 500 || code == 429 {
                        last_error = Some(err);
                        continue;
                    }
                    return Err(self.record_failure(err));
                }
                Err(ureq::Error::Transport(e)) => {
                    last_error = Some(ConnectorError::Request(e.to_string()));
                    continue;
                }
            }
        }

        Err(self.record_failure(
            last_error.unwrap_or_else(|| ConnectorError::Request("unknown error".into())),
        ))
    }
}
