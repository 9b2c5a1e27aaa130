//! Fixture loader shared by engine tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::path::PathBuf;

use latmon_core::{TelemetryRecord, TelemetryStore};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn fixture_store() -> TelemetryStore {
    TelemetryStore::from_path(&fixture_path("telemetry.json")).expect("fixture must parse")
}

pub fn store_of(records: &[(&str, f64, f64)]) -> TelemetryStore {
    TelemetryStore::new(
        records
            .iter()
            .map(|(region, latency, uptime)| TelemetryRecord::new(*region, *latency, *uptime))
            .collect(),
    )
}
