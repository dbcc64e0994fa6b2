/// Gauge registry and Prometheus text exposition.
///
/// Exactly two gauges are exposed, with the names and help text the
/// monitoring rules key on:
///
///   riverlevel — River Level m
///   period     — Period
///
/// Both are plain `prometheus::Gauge` values (atomic f64 underneath), so
/// the scrape path can read them concurrently with the poll path's writes.
/// No multi-field transaction is needed: each gauge is set independently
/// and a few milliseconds of skew between the pair is acceptable.

use prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};

/// Level value signalling "poll failed this cycle" or "no fresh data
/// within the staleness threshold". Negative so it can never be confused
/// with a genuine near-zero level.
pub const SENTINEL_LEVEL: f64 = -0.1;

/// Period value paired with [`SENTINEL_LEVEL`].
pub const SENTINEL_PERIOD: f64 = 0.0;

/// Process-wide gauge registry shared between the poller and the endpoint.
pub struct ExporterMetrics {
    registry: Registry,
    pub river_level: Gauge,
    pub period: Gauge,
}

impl ExporterMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let river_level = Gauge::with_opts(Opts::new("riverlevel", "River Level m"))?;
        let period = Gauge::with_opts(Opts::new("period", "Period"))?;

        registry.register(Box::new(river_level.clone()))?;
        registry.register(Box::new(period.clone()))?;

        Ok(Self {
            registry,
            river_level,
            period,
        })
    }

    /// Writes the failure/staleness sentinel pair.
    pub fn set_sentinel(&self) {
        self.river_level.set(SENTINEL_LEVEL);
        self.period.set(SENTINEL_PERIOD);
    }

    /// Renders the registry in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("non-UTF-8 exposition output: {}", e)))
    }
}
