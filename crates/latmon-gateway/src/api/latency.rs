use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use latmon_core::{MetricsReport, MetricsRequest};

use crate::api::ApiError;
use crate::app_state::AppState;

/// `POST /latency-metrics`
///
/// Deserialization is the only failure point; once a well-typed request
/// reaches the engine the response is always 200.
pub async fn latency_metrics(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<Json<MetricsReport>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        let err = ApiError::from(rejection);
        state
            .metrics()
            .request_rejections
            .inc(&[("code", err.code().as_str())]);
        tracing::warn!(error = %err.0, "rejected latency-metrics request");
        err
    })?;

    let started = Instant::now();
    let report = state.engine().compute(&req.regions, req.threshold_ms);
    let elapsed = started.elapsed();
    state.metrics().compute_duration.observe(&[], elapsed);

    for region in &req.regions {
        let known = report.record_count(region).unwrap_or(0) > 0;
        state
            .metrics()
            .regions_requested
            .inc(&[("known", if known { "true" } else { "false" })]);
    }

    tracing::debug!(
        regions = req.regions.len(),
        distinct = report.len(),
        threshold_ms = req.threshold_ms,
        elapsed_us = elapsed.as_micros() as u64,
        "latency metrics computed"
    );

    Ok(Json(report))
}
