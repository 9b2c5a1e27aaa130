//! Metrics engine: per-region latency/uptime summaries over a telemetry store.
//!
//! # Contract
//! - Regions are processed independently and in request order.
//! - A region with no records yields `RegionMetrics::ZERO`.
//! - `breaches` counts latencies strictly above the threshold.
//! - Averages and p95 are rounded to `stats::DECIMAL_PLACES`.
//! - Nothing here fails; the worst case is a zeroed summary.

pub mod compute;
pub mod types;

pub use compute::MetricsEngine;
pub use types::{MetricsReport, MetricsRequest, RegionMetrics};
