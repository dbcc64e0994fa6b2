/// Shared data types for the exporter.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A single parsed measurement from the flood-monitoring API.
///
/// Constructed from the first `items` entry of a measures response and
/// consumed within the same poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Water level in metres.
    pub value: f64,
    /// Measurement period in seconds (900 for a 15-minute gauge).
    pub period: f64,
    /// When the gauge recorded the measurement, not when we fetched it.
    pub timestamp: DateTime<Utc>,
}

/// Everything that can go wrong inside one poll cycle.
///
/// All four variants are handled identically and locally: logged, the
/// sentinel gauge pair written, cycle ends. None of them terminate the
/// process or advance the last-accepted timestamp.
#[derive(Debug, Error)]
pub enum PollError {
    /// Network failure, timeout, non-2xx status, or empty body.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body is not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// JSON is valid but an expected field or array is absent or has the
    /// wrong shape, including an empty `items` array.
    #[error("schema error: {0}")]
    Schema(String),

    /// `latestReading.dateTime` does not match the strict UTC format.
    #[error("time parse error: {0}")]
    TimeParse(String),
}
