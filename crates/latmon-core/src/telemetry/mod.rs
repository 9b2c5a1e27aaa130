//! Telemetry dataset (records + read-only store).
//!
//! The store is built once at startup and never mutated afterwards, so it can
//! be shared across request tasks behind an `Arc` without locking.

pub mod record;
pub mod store;

pub use record::TelemetryRecord;
pub use store::TelemetryStore;
