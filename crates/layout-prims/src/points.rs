//! Flattened point-set views (row-major, `n * dim` values).
//!
//! The backing buffer may be longer than `n * dim`; only the prefix is used.

use crate::error::PrimError;
use nalgebra::Vector2;

#[inline]
fn validate(len: usize, n: usize, dim: usize) -> Result<(), PrimError> {
    if dim == 0 {
        return Err(PrimError::ZeroDimension);
    }
    let need = n.checked_mul(dim).ok_or(PrimError::BufferTooShort {
        need: usize::MAX,
        have: len,
    })?;
    if len < need {
        return Err(PrimError::BufferTooShort { need, have: len });
    }
    Ok(())
}

/// Read-only view of `n` points with `dim` coordinates each.
#[derive(Clone, Copy, Debug)]
pub struct PointSet<'a> {
    coords: &'a [f64],
    n: usize,
    dim: usize,
}

impl<'a> PointSet<'a> {
    pub fn new(coords: &'a [f64], n: usize, dim: usize) -> Result<Self, PrimError> {
        validate(coords.len(), n, dim)?;
        Ok(Self {
            coords: &coords[..n * dim],
            n,
            dim,
        })
    }

    /// View covering the whole buffer. Rejects lengths not divisible by `dim`.
    pub fn from_flat(coords: &'a [f64], dim: usize) -> Result<Self, PrimError> {
        if dim == 0 {
            return Err(PrimError::ZeroDimension);
        }
        if coords.len() % dim != 0 {
            return Err(PrimError::BufferTooShort {
                need: coords.len().div_ceil(dim) * dim,
                have: coords.len(),
            });
        }
        Self::new(coords, coords.len() / dim, dim)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of point `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Result<&'a [f64], PrimError> {
        if i >= self.n {
            return Err(PrimError::IndexOutOfRange {
                index: i,
                len: self.n,
            });
        }
        Ok(&self.coords[i * self.dim..(i + 1) * self.dim])
    }

    /// First two coordinates of point `i` (needs `dim >= 2`).
    pub fn point2(&self, i: usize) -> Result<Vector2<f64>, PrimError> {
        if self.dim < 2 {
            return Err(PrimError::DimensionTooSmall {
                dim: self.dim,
                need: 2,
            });
        }
        let p = self.point(i)?;
        Ok(Vector2::new(p[0], p[1]))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [f64]> + 'a {
        self.coords.chunks_exact(self.dim)
    }
}

/// Mutable view of `n` points with `dim` coordinates each.
#[derive(Debug)]
pub struct PointSetMut<'a> {
    coords: &'a mut [f64],
    n: usize,
    dim: usize,
}

impl<'a> PointSetMut<'a> {
    pub fn new(coords: &'a mut [f64], n: usize, dim: usize) -> Result<Self, PrimError> {
        validate(coords.len(), n, dim)?;
        Ok(Self {
            coords: &mut coords[..n * dim],
            n,
            dim,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn as_view(&self) -> PointSet<'_> {
        PointSet {
            coords: &*self.coords,
            n: self.n,
            dim: self.dim,
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut [f64]> + '_ {
        self.coords.chunks_exact_mut(self.dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_use_prefix_only() {
        let buf = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ps = PointSet::new(&buf, 3, 2).unwrap();
        assert_eq!(ps.len(), 3);
        assert_eq!(ps.iter().last().unwrap(), &[4.0, 5.0]);
        assert_eq!(ps.point(2).unwrap(), &[4.0, 5.0]);
        assert_eq!(ps.point2(1).unwrap(), Vector2::new(2.0, 3.0));
        assert_eq!(ps.iter().count(), 3);
    }

    #[test]
    fn rejects_bad_shapes() {
        let buf = [0.0; 5];
        assert_eq!(
            PointSet::new(&buf, 3, 2).unwrap_err(),
            PrimError::BufferTooShort { need: 6, have: 5 }
        );
        assert_eq!(PointSet::new(&buf, 1, 0).unwrap_err(), PrimError::ZeroDimension);
        assert!(PointSet::from_flat(&buf, 2).is_err());
        assert_eq!(PointSet::from_flat(&buf, 5).unwrap().len(), 1);
        let ps = PointSet::new(&buf, 5, 1).unwrap();
        assert_eq!(
            ps.point(5).unwrap_err(),
            PrimError::IndexOutOfRange { index: 5, len: 5 }
        );
        assert!(ps.point2(0).is_err());
    }
}
