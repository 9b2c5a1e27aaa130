//! latmon gateway library entry.
//!
//! Wires config, the telemetry store, the metrics engine, and the HTTP
//! surface into a servable axum router. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
