//! Per-request accounting middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Count requests by route/method/status and track in-flight requests.
///
/// Mounted with `route_layer`, so `MatchedPath` is already resolved.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = method_label(req.method());
    let metrics = state.metrics();

    metrics.http_inflight.inc(&[("route", route.as_str())]);
    let started = Instant::now();
    let resp = next.run(req).await;
    metrics.http_inflight.dec(&[("route", route.as_str())]);

    let status = resp.status().as_u16().to_string();
    metrics
        .http_requests
        .inc(&[
            ("route", route.as_str()),
            ("method", method),
            ("status", status.as_str()),
        ]);

    tracing::debug!(
        %route,
        method,
        %status,
        elapsed_us = started.elapsed().as_micros() as u64,
        "request served"
    );
    resp
}

/// Closed label set for the request method; anything else folds into `other`.
pub fn method_label(method: &Method) -> &'static str {
    if method == Method::GET {
        "GET"
    } else if method == Method::HEAD {
        "HEAD"
    } else if method == Method::POST {
        "POST"
    } else if method == Method::OPTIONS {
        "OPTIONS"
    } else {
        "other"
    }
}
