//! Public HTTP API.
//!
//! - `GET /`                 : greeting
//! - `POST /latency-metrics` : per-region latency/uptime summary

pub mod error;
pub mod latency;

use axum::Json;
use serde_json::{json, Value};

pub use error::ApiError;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}
