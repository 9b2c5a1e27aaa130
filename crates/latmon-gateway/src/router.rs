//! Axum router wiring.
//!
//! Public API (`/`, `/latency-metrics`) and ops endpoints share one router.
//! CORS is outermost so preflights never reach the handlers.

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let max_body = state.cfg().gateway.max_body_bytes;
    let cors_enabled = state.cfg().gateway.cors_enabled;

    let router = Router::new()
        .route("/", get(api::root))
        .route("/latency-metrics", post(api::latency::latency_metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track::track_requests,
        ))
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router.layer(cors_layer())
    } else {
        router
    }
}

/// Any origin, GET/POST/OPTIONS, any header, no credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
