//! Request/response types of the metrics engine.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Regions to summarise and the latency breach threshold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsRequest {
    /// Region identifiers; duplicates and unknown regions are allowed.
    pub regions: Vec<String>,
    /// Breach threshold in milliseconds. Any value is accepted.
    pub threshold_ms: f64,
}

/// Summary for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionMetrics {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionMetrics {
    /// Value reported for regions without records.
    pub const ZERO: RegionMetrics = RegionMetrics {
        avg_latency: 0.0,
        p95_latency: 0.0,
        avg_uptime: 0.0,
        breaches: 0,
    };
}

impl Default for RegionMetrics {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Region -> metrics mapping that keeps first-insertion order.
///
/// Serializes as a JSON object. Re-inserting a region replaces its value in
/// place, so keys stay unique and in the order they were first requested.
/// Each entry also remembers how many records backed it; the count is not
/// part of the wire format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReport {
    entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, PartialEq)]
struct ReportEntry {
    region: String,
    metrics: RegionMetrics,
    records: usize,
}

impl MetricsReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, region: &str, metrics: RegionMetrics, records: usize) {
        match self.entries.iter_mut().find(|e| e.region == region) {
            Some(e) => {
                e.metrics = metrics;
                e.records = records;
            }
            None => self.entries.push(ReportEntry {
                region: region.to_string(),
                metrics,
                records,
            }),
        }
    }

    pub fn get(&self, region: &str) -> Option<&RegionMetrics> {
        self.entry(region).map(|e| &e.metrics)
    }

    /// Number of store records behind `region` (0 for unknown regions).
    pub fn record_count(&self, region: &str) -> Option<usize> {
        self.entry(region).map(|e| e.records)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionMetrics)> {
        self.entries.iter().map(|e| (e.region.as_str(), &e.metrics))
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.region.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, region: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.region == region)
    }
}

impl Serialize for MetricsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(&e.region, &e.metrics)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn request_accepts_integer_threshold() {
        let req: MetricsRequest =
            serde_json::from_str(r#"{"regions":["us-east","apac"],"threshold_ms":180}"#).unwrap();
        assert_eq!(req.regions, vec!["us-east", "apac"]);
        assert_eq!(req.threshold_ms, 180.0);
    }

    #[test]
    fn request_requires_threshold() {
        assert!(serde_json::from_str::<MetricsRequest>(r#"{"regions":[]}"#).is_err());
    }

    #[test]
    fn report_serializes_in_insertion_order() {
        let mut report = MetricsReport::new();
        report.insert("zeta", RegionMetrics::ZERO, 0);
        report.insert("alpha", RegionMetrics::ZERO, 0);
        report.insert("zeta", RegionMetrics { breaches: 3, ..RegionMetrics::ZERO }, 4);

        let s = serde_json::to_string(&report).unwrap();
        assert!(s.find("\"zeta\"").unwrap() < s.find("\"alpha\"").unwrap());
        assert_eq!(report.len(), 2);
        assert_eq!(report.get("zeta").unwrap().breaches, 3);
        assert_eq!(report.record_count("zeta"), Some(4));
        assert!(!s.contains("records"));
    }

    #[test]
    fn zero_metrics_wire_shape() {
        let v = serde_json::to_value(RegionMetrics::ZERO).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"avg_latency":0.0,"p95_latency":0.0,"avg_uptime":0.0,"breaches":0})
        );
    }
}
