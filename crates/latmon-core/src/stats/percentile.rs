//! Nearest-rank percentile.
//!
//! For a sample of `n` values sorted ascending, the `p`-th percentile is the
//! value at 1-based rank `ceil(p * n / 100)`. No interpolation between
//! neighbours: the result is always a member of the sample. The rank is
//! computed in integer arithmetic so `p * n / 100` landing exactly on an
//! integer never drifts up a slot through float error.
//!
//! | n  | p95 rank |
//! |----|----------|
//! | 1  | 1        |
//! | 2  | 2        |
//! | 20 | 19       |
//! | 21 | 20       |

/// Percentile used for `p95_latency`.
pub const P95: u32 = 95;

/// 1-based nearest rank for `pct` over `n` samples (0 when `n == 0`).
pub fn rank(n: usize, pct: u32) -> usize {
    let pct = pct.clamp(1, 100) as usize;
    pct.saturating_mul(n).saturating_add(99) / 100
}

/// Nearest-rank percentile of an ascending-sorted slice.
pub fn nearest_rank(sorted: &[f64], pct: u32) -> Option<f64> {
    let r = rank(sorted.len(), pct);
    sorted.get(r.checked_sub(1)?).copied()
}

/// Sort a copy of `values` ascending and take the nearest-rank percentile.
pub fn percentile(values: &[f64], pct: u32) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    nearest_rank(&sorted, pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_table() {
        assert_eq!(rank(0, P95), 0);
        assert_eq!(rank(1, P95), 1);
        assert_eq!(rank(2, P95), 2);
        assert_eq!(rank(20, P95), 19);
        assert_eq!(rank(21, P95), 20);
        assert_eq!(rank(100, P95), 95);
    }

    #[test]
    fn empty_sample_has_no_percentile() {
        assert_eq!(percentile(&[], P95), None);
    }

    #[test]
    fn single_element_is_itself() {
        assert_eq!(percentile(&[150.0], P95), Some(150.0));
    }

    #[test]
    fn twenty_values_pick_nineteenth() {
        let values: Vec<f64> = (1..=20).map(|v| v as f64 * 10.0).collect();
        assert_eq!(percentile(&values, P95), Some(190.0));
    }

    #[test]
    fn permutation_does_not_matter() {
        let a = [5.0, 1.0, 9.0, 3.0, 7.0];
        let b = [9.0, 7.0, 5.0, 3.0, 1.0];
        assert_eq!(percentile(&a, P95), percentile(&b, P95));
        assert_eq!(percentile(&a, P95), Some(9.0));
    }

    #[test]
    fn median_by_nearest_rank() {
        assert_eq!(percentile(&[4.0, 1.0, 3.0, 2.0], 50), Some(2.0));
    }
}
