/// riverlevel_exporter: staleness-aware Prometheus exporter for a single
/// Environment Agency river-gauge station.
///
/// # Module structure
///
/// ```text
/// riverlevel_exporter
/// ├── model     — shared data types (Reading, PollError)
/// ├── config    — exporter configuration loader (riverlevel.toml)
/// ├── ingest
/// │   ├── floodmon — EA flood-monitoring measures API: JSON parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── metrics   — gauge registry (riverlevel, period) + text exposition
/// ├── poller    — fetch/parse/accept/staleness cycle with sentinel policy
/// └── endpoint  — HTTP server exposing /metrics and /health
/// ```

/// Public modules
pub mod config;
pub mod endpoint;
pub mod ingest;
pub mod metrics;
pub mod model;
pub mod poller;
