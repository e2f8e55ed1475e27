//! Ranking and integer sorting.
//!
//! Ties in `rank_ascending` are broken by original index, so equal values keep
//! their input order. Numbers compare with `f64::total_cmp` (`-0.0 < 0.0`).
//! Every NaN sorts after every number, whatever its sign bit.

use crate::error::{check_same_len, PrimError};
use std::cmp::Ordering;

#[inline]
fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}

/// Indices that sort `values` ascending: `values[r[0]] <= values[r[1]] <= ...`.
pub fn rank_ascending(values: &[f64]) -> Vec<usize> {
    let mut out = vec![0; values.len()];
    fill_ranking(values, &mut out);
    out
}

/// Ranking written into a caller buffer of length `values.len()`.
pub fn rank_ascending_into(values: &[f64], out: &mut [usize]) -> Result<(), PrimError> {
    check_same_len(values.len(), out.len())?;
    fill_ranking(values, out);
    Ok(())
}

fn fill_ranking(values: &[f64], out: &mut [usize]) {
    let mut pairs: Vec<(f64, usize)> = values.iter().copied().zip(0..).collect();
    pairs.sort_unstable_by(|a, b| nan_last(a.0, b.0).then(a.1.cmp(&b.1)));
    for (slot, (_, i)) in out.iter_mut().zip(pairs) {
        *slot = i;
    }
}

/// In-place ascending sort. Equal integers are indistinguishable, so
/// stability is irrelevant here.
#[inline]
pub fn sort_int_ascending(values: &mut [i64]) {
    values.sort_unstable();
}
