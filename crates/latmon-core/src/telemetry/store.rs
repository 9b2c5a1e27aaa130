//! In-memory telemetry store.
//!
//! Loading is strict (`from_json_str`, `from_path`) so callers can see why a
//! source was rejected; `load_or_empty` is the startup entry point and
//! degrades any source failure to an empty store.

use std::fs;
use std::path::Path;

use crate::error::{LatmonError, Result};

use super::record::TelemetryRecord;

/// Ordered, immutable collection of telemetry records.
#[derive(Debug, Clone, Default)]
pub struct TelemetryStore {
    records: Vec<TelemetryRecord>,
}

impl TelemetryStore {
    pub fn new(records: Vec<TelemetryRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let records: Vec<TelemetryRecord> = serde_json::from_str(s)
            .map_err(|e| LatmonError::DataSource(format!("invalid telemetry json: {e}")))?;
        Ok(Self::new(records))
    }

    /// Read and parse a telemetry file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).map_err(|e| {
            LatmonError::DataSource(format!("read {} failed: {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Load from `path`, falling back to an empty store if the source is
    /// missing or malformed.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    records = store.len(),
                    "telemetry store loaded"
                );
                store
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "telemetry source unavailable; serving empty store"
                );
                Self::empty()
            }
        }
    }

    /// All records for `region`, in store order.
    pub fn records_for_region<'a>(
        &'a self,
        region: &'a str,
    ) -> impl Iterator<Item = &'a TelemetryRecord> + 'a {
        self.records.iter().filter(move |r| r.region == region)
    }

    /// Distinct region names in first-seen order.
    pub fn regions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.region.as_str()) {
                out.push(&r.region);
            }
        }
        out
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<TelemetryRecord>> for TelemetryStore {
    fn from(records: Vec<TelemetryRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn store() -> TelemetryStore {
        TelemetryStore::new(vec![
            TelemetryRecord::new("us-east", 100.0, 99.9),
            TelemetryRecord::new("eu-west", 80.0, 98.0),
            TelemetryRecord::new("us-east", 300.0, 99.5),
        ])
    }

    #[test]
    fn lookup_preserves_store_order() {
        let s = store();
        let lat: Vec<f64> = s.records_for_region("us-east").map(|r| r.latency_ms).collect();
        assert_eq!(lat, vec![100.0, 300.0]);
    }

    #[test]
    fn unknown_region_is_empty_not_error() {
        assert_eq!(store().records_for_region("ap-south").count(), 0);
    }

    #[test]
    fn regions_are_distinct_first_seen() {
        assert_eq!(store().regions(), vec!["us-east", "eu-west"]);
    }

    #[test]
    fn parse_ignores_extra_fields() {
        let s = TelemetryStore::from_json_str(
            r#"[{"region":"apac","service":"checkout","latency_ms":120,"uptime_pct":97.5,"timestamp":20250301}]"#,
        )
        .unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.records()[0].latency_ms, 120.0);
    }

    #[test]
    fn malformed_json_is_data_source_error() {
        let err = TelemetryStore::from_json_str("{not json").expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "DATA_SOURCE");
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let s = TelemetryStore::load_or_empty(Path::new("does/not/exist/telemetry.json"));
        assert!(s.is_empty());
    }
}
