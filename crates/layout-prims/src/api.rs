//! Flat re-export surface for the layout engine, plus the flat-buffer
//! form of `scale_to_box`.

pub use crate::cfg::{DistanceCfg, MIN_DIST};
pub use crate::distance::{distance, distance_floored, distance_floored_with, point_distance};
pub use crate::error::PrimError;
pub use crate::order::{rank_ascending, sort_int_ascending};
pub use crate::perm::random_permutation;
pub use crate::points::{PointSet, PointSetMut};
pub use crate::rng::{RandomStream, ReplayToken};
pub use crate::scale::{scale_to_box, BBox2};
pub use crate::vector::{dot, saxpy_into_x, saxpy_into_y, subtract_in_place};

/// Scale the first `n` points of a flat row-major buffer of
/// `dim`-dimensional points into `[xmin, xmax] x [ymin, ymax]`.
/// Returns the applied factor.
///
/// Pre: `coords.len() >= n * dim` and `dim >= 2`. Values past `n * dim`
/// are left untouched.
pub fn scale_flat_to_box(
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
    n: usize,
    dim: usize,
    coords: &mut [f64],
) -> Result<f64, PrimError> {
    let mut ps = PointSetMut::new(coords, n, dim)?;
    Ok(scale_to_box(BBox2::new(xmin, ymin, xmax, ymax), &mut ps)?.scale)
}
