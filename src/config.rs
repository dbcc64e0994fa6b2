/// Exporter configuration loader - parses riverlevel.toml
///
/// Separates deployment knobs (station URL, listen port, intervals) from
/// code. Every field is optional: a missing file yields the defaults that
/// match the production station, while a malformed file is a fatal startup
/// error because running against a half-read configuration is worse than
/// not starting.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Measures resource for the production station.
pub const DEFAULT_STATION_URL: &str =
    "http://environment.data.gov.uk/flood-monitoring/id/stations/53125/measures";

/// Exporter configuration, loaded from riverlevel.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExporterConfig {
    /// Measures endpoint of the single monitored station.
    pub station_url: String,

    /// Port for the /metrics scrape endpoint.
    pub listen_port: u16,

    /// How often to poll the measures endpoint.
    pub poll_interval_minutes: u64,

    /// Per-request HTTP timeout. Must stay far below the poll interval so
    /// cycles never overlap.
    pub request_timeout_seconds: u64,

    /// Maximum age of the last accepted reading before the gauges are
    /// forced to the sentinel pair. The upstream publishes in irregular
    /// batches with 6+ hour gaps, so this is deliberately generous.
    pub staleness_threshold_hours: i64,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            station_url: DEFAULT_STATION_URL.to_string(),
            listen_port: 50000,
            poll_interval_minutes: 7,
            request_timeout_seconds: 10,
            staleness_threshold_hours: 24,
        }
    }
}

/// Loads exporter configuration from the given path.
///
/// A missing file is not an error; the defaults describe a complete,
/// working deployment. A file that exists but cannot be read or parsed is.
pub fn load_config(path: &Path) -> Result<ExporterConfig, String> {
    if !path.exists() {
        return Ok(ExporterConfig::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    toml::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
