//! latmon core: telemetry store, metrics engine, wire types, and errors.
//!
//! This crate owns the statistics semantics (means, nearest-rank p95, strict
//! threshold breaches) and the in-memory dataset they are computed over. It
//! carries no transport or runtime dependencies so it can be driven by the
//! gateway, by tests with fixture data, or by any other front end.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Fallible paths surface as `LatmonError`/`Result`; the metrics engine
//! itself has no failure modes.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod engine;
pub mod error;
pub mod stats;
pub mod telemetry;

/// Shared result type.
pub use error::{LatmonError, Result};

pub use engine::{MetricsEngine, MetricsReport, MetricsRequest, RegionMetrics};
pub use telemetry::{TelemetryRecord, TelemetryStore};
