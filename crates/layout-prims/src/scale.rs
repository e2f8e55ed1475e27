//! Aspect-preserving rescale of a point set into a 2D target box.
//!
//! Model
//! - Extents are taken over the first two coordinates only.
//! - One shared factor `s = min(sx, sy)` keeps the aspect ratio, so the set
//!   fits without distortion but may not fill the box along one axis.
//! - A zero extent contributes no factor (`sx` defaults to `1`); points then
//!   collapse onto the target minimum along that axis.
//! - Coordinates beyond the second are left untouched.

use crate::error::PrimError;
use crate::points::{PointSet, PointSetMut};
use nalgebra::Vector2;

/// Axis-aligned 2D rectangle `[min.x, max.x] x [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BBox2 {
    #[inline]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            min: Vector2::new(xmin, ymin),
            max: Vector2::new(xmax, ymax),
        }
    }

    #[inline]
    pub fn extent(&self) -> Vector2<f64> {
        self.max - self.min
    }

    /// Containment with slack `eps` on every side.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }
}

/// Result of `scale_to_box`: the applied factor and the source bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleOutcome {
    pub scale: f64,
    /// `None` for an empty point set (nothing was moved).
    pub source: Option<BBox2>,
}

/// Bounds of the first two coordinates. `None` for an empty set.
pub fn bounding_box(points: &PointSet<'_>) -> Result<Option<BBox2>, PrimError> {
    if points.dim() < 2 {
        return Err(PrimError::DimensionTooSmall {
            dim: points.dim(),
            need: 2,
        });
    }
    let mut it = points.iter();
    let Some(first) = it.next() else {
        return Ok(None);
    };
    let mut bb = BBox2::new(first[0], first[1], first[0], first[1]);
    for p in it {
        bb.min.x = bb.min.x.min(p[0]);
        bb.min.y = bb.min.y.min(p[1]);
        bb.max.x = bb.max.x.max(p[0]);
        bb.max.y = bb.max.y.max(p[1]);
    }
    Ok(Some(bb))
}

/// Rescale `points` in place into `target`, preserving aspect ratio.
pub fn scale_to_box(target: BBox2, points: &mut PointSetMut<'_>) -> Result<ScaleOutcome, PrimError> {
    let Some(source) = bounding_box(&points.as_view())? else {
        return Ok(ScaleOutcome {
            scale: 1.0,
            source: None,
        });
    };
    let ext = source.extent();
    let want = target.extent();
    let mut scale = 1.0;
    if ext.x != 0.0 {
        scale = want.x / ext.x;
    }
    if ext.y != 0.0 {
        scale = f64::min(scale, want.y / ext.y);
    }
    if ext.x == 0.0 || ext.y == 0.0 {
        tracing::debug!(ext_x = ext.x, ext_y = ext.y, scale, "degenerate extent in scale_to_box");
    }
    for p in points.iter_mut() {
        let q = target.min + (Vector2::new(p[0], p[1]) - source.min) * scale;
        p[0] = q.x;
        p[1] = q.y;
    }
    Ok(ScaleOutcome {
        scale,
        source: Some(source),
    })
}
