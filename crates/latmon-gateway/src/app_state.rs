//! Shared application state for the latmon gateway.
//!
//! Holds the validated config, the read-only telemetry store, and the metrics
//! registry. Cloning is cheap (two `Arc` bumps); handlers borrow the store to
//! build a `MetricsEngine` per request.

use std::sync::Arc;

use latmon_core::{MetricsEngine, TelemetryStore};

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    store: TelemetryStore,
}

impl AppState {
    /// Build state around an already-loaded store (tests inject fixtures here).
    pub fn new(cfg: GatewayConfig, store: TelemetryStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
            metrics: Arc::new(GatewayMetrics::default()),
        }
    }

    /// Build state loading the store from `cfg.data.path`.
    /// A missing or malformed data file yields an empty store.
    pub fn from_config(cfg: GatewayConfig) -> Self {
        let store = TelemetryStore::load_or_empty(&cfg.data.path);
        Self::new(cfg, store)
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &TelemetryStore {
        &self.inner.store
    }

    pub fn engine(&self) -> MetricsEngine<'_> {
        MetricsEngine::new(&self.inner.store)
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.metrics
    }

    /// Store-derived gauges appended to the `/metrics` output.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        let store = self.store();
        vec![
            ("latmon_store_records", store.len() as u64),
            ("latmon_store_regions", store.regions().len() as u64),
        ]
    }
}
