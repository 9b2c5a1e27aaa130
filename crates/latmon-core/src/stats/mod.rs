//! Numeric primitives behind the region metrics.
//!
//! Everything here is panic-free and works on plain `f64` slices. Empty input
//! yields `None`; callers decide what an empty sample means.

pub mod percentile;

pub use percentile::{nearest_rank, percentile, P95};

/// Decimal places kept for every averaged or percentile field.
pub const DECIMAL_PLACES: i32 = 2;

/// Arithmetic mean, or `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round to the crate-wide `DECIMAL_PLACES`.
pub fn round2(value: f64) -> f64 {
    round_to(value, DECIMAL_PLACES)
}
