//! Numeric primitives for iterative graph-layout solvers.
//!
//! Scope
//! - Random permutations drawn from an explicit, caller-owned `RandomStream`.
//! - Fixed-length vector updates (subtract, dot, two saxpy variants).
//! - Ranking and integer sorting.
//! - Euclidean distances over flattened point sets, raw and floored.
//! - Aspect-preserving rescaling of a point set into a 2D box.
//!
//! Conventions
//! - Point sets are row-major flat buffers: point `i`, coordinate `k` at `i*dim+k`.
//! - All buffers are caller-owned. Nothing is retained after a call returns.
//! - Invalid inputs are rejected with `PrimError`. Degenerate numeric cases
//!   (zero extent, coincident points) are handled by policy and never fail.
//!
//! Code cross-refs: `RandomStream`, `PointSet`, `BBox2`, `DistanceCfg`.

pub mod api;
pub mod cfg;
pub mod distance;
pub mod error;
pub mod order;
pub mod perm;
pub mod points;
pub mod rng;
pub mod scale;
pub mod vector;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PrimError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in solver code.
pub mod prelude {
    pub use crate::cfg::{DistanceCfg, DEFAULT_SEED, MIN_DIST};
    pub use crate::distance::{distance, distance_floored, distance_floored_with, point_distance};
    pub use crate::error::PrimError;
    pub use crate::order::{rank_ascending, rank_ascending_into, sort_int_ascending};
    pub use crate::perm::{is_permutation, random_permutation, random_permutation_into};
    pub use crate::points::{PointSet, PointSetMut};
    pub use crate::rng::{BoundedDraw, RandomStream, ReplayToken, StreamCfg};
    pub use crate::scale::{bounding_box, scale_to_box, BBox2, ScaleOutcome};
    pub use crate::vector::{
        dot, saxpy_into_x, saxpy_into_y, subtract_in_place, take, take_into, VecFmt,
    };
    pub use nalgebra::Vector2 as Vec2;
}
