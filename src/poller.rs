/// Core poll cycle for the exporter.
///
/// This module implements the loop that:
/// 1. Fetches the station's measures resource with a bounded timeout
/// 2. Parses the latest reading out of the response
/// 3. Accepts the reading only if it is newer than the last accepted one
/// 4. Checks staleness of the last accepted reading against a threshold
/// 5. Writes the sentinel gauge pair on any failure or staleness
///
/// The upstream publishes in irregular batches (gaps of 6+ hours are
/// normal), so "last known good value" exposition would make a real outage
/// indistinguishable from an ordinary batching delay. The sentinel pair
/// (level -0.1, period 0.0) is what lets a monitoring rule tell them apart.

use crate::config::ExporterConfig;
use crate::ingest::floodmon;
use crate::metrics::ExporterMetrics;
use crate::model::PollError;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Poll cycle driver. Holds the only mutable poller state: the timestamp of
/// the last accepted reading, which advances monotonically in reading time
/// (never poll time) and starts at the Unix epoch.
pub struct Poller {
    station_url: String,
    poll_interval: std::time::Duration,
    staleness_threshold: Duration,
    client: reqwest::blocking::Client,
    metrics: Arc<ExporterMetrics>,
    last_accepted: DateTime<Utc>,
}

impl Poller {
    pub fn new(config: &ExporterConfig, metrics: Arc<ExporterMetrics>) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            station_url: config.station_url.clone(),
            poll_interval: std::time::Duration::from_secs(config.poll_interval_minutes * 60),
            staleness_threshold: Duration::hours(config.staleness_threshold_hours),
            client,
            metrics,
            last_accepted: DateTime::UNIX_EPOCH,
        })
    }

    /// Timestamp of the most recently accepted reading. Stays at the Unix
    /// epoch until the first acceptance.
    pub fn last_accepted(&self) -> DateTime<Utc> {
        self.last_accepted
    }

    /// Runs one poll cycle against the live station endpoint.
    pub fn poll(&mut self) {
        let fetched = self.fetch();
        self.apply_fetch(fetched, Utc::now());
    }

    /// Applies a fetch outcome to the gauges as of `now`.
    ///
    /// Split out from [`poll`](Self::poll) so cycles can be driven with
    /// canned payloads and a fixed clock. The ordering here is part of the
    /// contract: the staleness check runs after the acceptance check, using
    /// the post-update timestamp, so a reading accepted moments earlier in
    /// the same cycle counts against the threshold.
    pub fn apply_fetch(&mut self, fetched: Result<String, PollError>, now: DateTime<Utc>) {
        match fetched.and_then(|body| floodmon::parse_measures_response(&body)) {
            Ok(reading) => {
                if reading.timestamp > self.last_accepted {
                    info!(
                        value = reading.value,
                        period = reading.period,
                        timestamp = %reading.timestamp,
                        "accepted reading"
                    );
                    self.metrics.river_level.set(reading.value);
                    self.metrics.period.set(reading.period);
                    self.last_accepted = reading.timestamp;
                } else {
                    // Batched upstream: re-seeing the same latestReading
                    // between batches is routine, not worth a log line above
                    // debug.
                    debug!(timestamp = %reading.timestamp, "discarding duplicate/stale reading");
                }
            }
            Err(e) => {
                error!("poll cycle failed: {}", e);
                self.metrics.set_sentinel();
            }
        }

        if now - self.last_accepted > self.staleness_threshold {
            warn!(
                last_accepted = %self.last_accepted,
                "no fresh data within staleness threshold"
            );
            self.metrics.set_sentinel();
        }
    }

    /// GETs the measures resource. Timeout, connection errors, non-2xx
    /// statuses and empty bodies all collapse into `PollError::Transport`.
    fn fetch(&self) -> Result<String, PollError> {
        let response = self
            .client
            .get(&self.station_url)
            .send()
            .map_err(|e| PollError::Transport(format!("GET {} failed: {}", self.station_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Transport(format!(
                "GET {} returned {}",
                self.station_url, status
            )));
        }

        let body = response
            .text()
            .map_err(|e| PollError::Transport(format!("failed to read response body: {}", e)))?;

        if body.is_empty() {
            return Err(PollError::Transport("empty response body".to_string()));
        }

        Ok(body)
    }

    /// Fixed-period poll loop, run on a background thread for the life of
    /// the process. The caller runs the first cycle synchronously at
    /// startup, so this sleeps before each poll rather than after.
    ///
    /// Cycles run strictly sequentially; the request timeout is far shorter
    /// than the interval, so ticks never overlap.
    pub fn run(&mut self) -> ! {
        loop {
            std::thread::sleep(self.poll_interval);
            self.poll();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
