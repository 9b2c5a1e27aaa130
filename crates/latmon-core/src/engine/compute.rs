use crate::stats::{self, P95};
use crate::telemetry::TelemetryStore;

use super::types::{MetricsReport, RegionMetrics};

/// Borrowing view over a store that computes region summaries.
///
/// Construct one per request; it holds no state beyond the store reference.
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine<'a> {
    store: &'a TelemetryStore,
}

impl<'a> MetricsEngine<'a> {
    pub fn new(store: &'a TelemetryStore) -> Self {
        Self { store }
    }

    /// Summaries for every requested region, keyed in request order.
    pub fn compute<S: AsRef<str>>(&self, regions: &[S], threshold_ms: f64) -> MetricsReport {
        let mut report = MetricsReport::new();
        for region in regions {
            let region = region.as_ref();
            let (metrics, records) = self.summarize(region, threshold_ms);
            report.insert(region, metrics, records);
        }
        report
    }

    /// Summary for a single region (`RegionMetrics::ZERO` when unknown).
    pub fn region_metrics(&self, region: &str, threshold_ms: f64) -> RegionMetrics {
        self.summarize(region, threshold_ms).0
    }

    /// Metrics plus the number of records they were computed from, in one scan.
    fn summarize(&self, region: &str, threshold_ms: f64) -> (RegionMetrics, usize) {
        let mut latencies = Vec::new();
        let mut uptimes = Vec::new();
        for r in self.store.records_for_region(region) {
            latencies.push(r.latency_ms);
            uptimes.push(r.uptime_pct);
        }

        let (Some(avg_latency), Some(avg_uptime)) = (stats::mean(&latencies), stats::mean(&uptimes))
        else {
            return (RegionMetrics::ZERO, 0);
        };

        let breaches = latencies.iter().filter(|&&l| l > threshold_ms).count() as u64;

        latencies.sort_by(|a, b| a.total_cmp(b));
        let p95_latency = stats::nearest_rank(&latencies, P95).unwrap_or(0.0);

        let metrics = RegionMetrics {
            avg_latency: stats::round2(avg_latency),
            p95_latency: stats::round2(p95_latency),
            avg_uptime: stats::round2(avg_uptime),
            breaches,
        };
        (metrics, latencies.len())
    }
}
