use serde::Deserialize;

/// One latency/uptime observation for a region.
///
/// Extra fields present in the data file (timestamps, service names) are
/// ignored on load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelemetryRecord {
    /// Region identifier (e.g. "us-east").
    pub region: String,
    /// Observed latency in milliseconds.
    pub latency_ms: f64,
    /// Observed uptime percentage, conventionally 0..=100.
    pub uptime_pct: f64,
}

impl TelemetryRecord {
    pub fn new(region: impl Into<String>, latency_ms: f64, uptime_pct: f64) -> Self {
        Self {
            region: region.into(),
            latency_ms,
            uptime_pct,
        }
    }
}
