//! Euclidean distances over flattened point sets.
//!
//! All forms compute `sqrt(sum_k (a_k - b_k)^2)` accumulating over `k` in order.

use crate::cfg::DistanceCfg;
use crate::error::{check_same_len, PrimError};
use crate::points::PointSet;

#[inline]
fn euclid(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&ak, &bk)| (ak - bk) * (ak - bk))
        .sum::<f64>()
        .sqrt()
}

/// Distance between points `i` and `j` of `points`.
pub fn distance(points: &PointSet<'_>, i: usize, j: usize) -> Result<f64, PrimError> {
    Ok(euclid(points.point(i)?, points.point(j)?))
}

/// `distance` clamped below by `MIN_DIST`.
#[inline]
pub fn distance_floored(points: &PointSet<'_>, i: usize, j: usize) -> Result<f64, PrimError> {
    distance_floored_with(points, i, j, DistanceCfg::default())
}

/// `distance` clamped below by `cfg.min_dist`.
pub fn distance_floored_with(
    points: &PointSet<'_>,
    i: usize,
    j: usize,
    cfg: DistanceCfg,
) -> Result<f64, PrimError> {
    let d = distance(points, i, j)?;
    if d < cfg.min_dist {
        tracing::trace!(i, j, d, floor = cfg.min_dist, "distance floored");
        return Ok(cfg.min_dist);
    }
    Ok(d)
}

/// Distance between two standalone points of equal dimension.
pub fn point_distance(p1: &[f64], p2: &[f64]) -> Result<f64, PrimError> {
    check_same_len(p1.len(), p2.len())?;
    Ok(euclid(p1, p2))
}
