/// EA flood-monitoring measures API client: JSON response parsing.
///
/// Handles response parsing for a station's measures resource:
///   http://environment.data.gov.uk/flood-monitoring/id/stations/{id}/measures
///
/// See `fixtures.rs` for annotated examples of the response structure. The
/// part we consume is:
///
///   items[0].period                    — measurement period, seconds
///   items[0].latestReading.dateTime    — UTC, seconds precision, "Z" suffix
///   items[0].latestReading.value       — water level, metres
///
/// Decoding is two-stage so the error taxonomy stays meaningful: a body
/// that is not JSON at all is a `Parse` error, a JSON body missing the
/// expected fields (or carrying them with the wrong type) is a `Schema`
/// error, and only the timestamp format yields `TimeParse`.

use crate::model::{PollError, Reading};
use chrono::NaiveDateTime;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde structures for measures JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct MeasuresResponse {
    items: Vec<MeasureItem>,
}

#[derive(Deserialize)]
struct MeasureItem {
    period: f64,
    #[serde(rename = "latestReading")]
    latest_reading: LatestReading,
}

#[derive(Deserialize)]
struct LatestReading {
    #[serde(rename = "dateTime")]
    date_time: String,
    value: f64,
}

/// Strict upstream timestamp format: `YYYY-MM-DDTHH:MM:SSZ`. Offsets and
/// fractional seconds are rejected rather than coerced.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a measures response body into the latest [`Reading`].
///
/// The first `items` entry wins; a station publishes one measure per
/// parameter and ours carries the level measure first. Unknown fields and
/// additional entries are ignored.
///
/// # Errors
/// - `PollError::Parse` — body is not valid JSON.
/// - `PollError::Schema` — valid JSON with a missing/malformed field, or
///   an empty `items` array.
/// - `PollError::TimeParse` — `dateTime` does not match the strict format.
pub fn parse_measures_response(json: &str) -> Result<Reading, PollError> {
    let document: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| PollError::Parse(format!("invalid JSON: {}", e)))?;

    let response: MeasuresResponse = serde_json::from_value(document)
        .map_err(|e| PollError::Schema(format!("unexpected response shape: {}", e)))?;

    let item = response
        .items
        .first()
        .ok_or_else(|| PollError::Schema("empty items array".to_string()))?;

    let timestamp = NaiveDateTime::parse_from_str(&item.latest_reading.date_time, DATE_TIME_FORMAT)
        .map_err(|e| {
            PollError::TimeParse(format!(
                "dateTime {:?} does not match {}: {}",
                item.latest_reading.date_time, DATE_TIME_FORMAT, e
            ))
        })?
        .and_utc();

    Ok(Reading {
        value: item.latest_reading.value,
        period: item.period,
        timestamp,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
