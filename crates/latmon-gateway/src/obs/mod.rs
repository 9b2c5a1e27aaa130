//! Lightweight in-process metrics.
//!
//! Counters, gauges and histograms are stored as atomics in `DashMap`s and
//! rendered in Prometheus text format by the `/metrics` handler. The request
//! middleware in `track` feeds the HTTP-level series.

pub mod metrics;
pub mod track;
