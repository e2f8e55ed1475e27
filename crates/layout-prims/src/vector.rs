//! Fixed-length vector updates used inside iterative solvers.
//!
//! All binary operations require equal-length operands and return
//! `PrimError::LengthMismatch` otherwise. Mutating operations hand the
//! mutated buffer back so updates can be chained at the call site:
//! `saxpy_into_y(x, subtract_in_place(x, y)?, -1.0)?`.

use crate::error::{check_same_len, PrimError};
use std::fmt;

/// `y[i] = x[i] - y[i]`. `x` is unchanged.
pub fn subtract_in_place<'y>(x: &[f64], y: &'y mut [f64]) -> Result<&'y mut [f64], PrimError> {
    check_same_len(x.len(), y.len())?;
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = xi - *yi;
    }
    Ok(y)
}

/// Sum of `x[i] * y[i]`, accumulated left to right from index 0.
pub fn dot(x: &[f64], y: &[f64]) -> Result<f64, PrimError> {
    check_same_len(x.len(), y.len())?;
    let mut acc = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        acc += xi * yi;
    }
    Ok(acc)
}

/// `y[i] = x[i] + beta * y[i]`. `x` is unchanged.
pub fn saxpy_into_y<'y>(
    x: &[f64],
    y: &'y mut [f64],
    beta: f64,
) -> Result<&'y mut [f64], PrimError> {
    check_same_len(x.len(), y.len())?;
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = xi + beta * *yi;
    }
    Ok(y)
}

/// `x[i] = x[i] + beta * y[i]`. `y` is unchanged.
pub fn saxpy_into_x<'x>(
    x: &'x mut [f64],
    y: &[f64],
    beta: f64,
) -> Result<&'x mut [f64], PrimError> {
    check_same_len(x.len(), y.len())?;
    for (xi, &yi) in x.iter_mut().zip(y) {
        *xi += beta * yi;
    }
    Ok(x)
}

/// Gather `values[indices[i]]` into a new buffer.
pub fn take<T: Copy>(values: &[T], indices: &[usize]) -> Result<Vec<T>, PrimError> {
    indices
        .iter()
        .map(|&i| {
            values.get(i).copied().ok_or(PrimError::IndexOutOfRange {
                index: i,
                len: values.len(),
            })
        })
        .collect()
}

/// Gather into a caller buffer of length `indices.len()`.
///
/// On error, `out` may be partially written.
pub fn take_into<T: Copy>(values: &[T], indices: &[usize], out: &mut [T]) -> Result<(), PrimError> {
    check_same_len(indices.len(), out.len())?;
    for (slot, &i) in out.iter_mut().zip(indices) {
        *slot = *values.get(i).ok_or(PrimError::IndexOutOfRange {
            index: i,
            len: values.len(),
        })?;
    }
    Ok(())
}

/// Displays a vector as `label{v0,v1,...}` with six decimals per entry.
#[derive(Clone, Copy, Debug)]
pub struct VecFmt<'a> {
    pub label: &'a str,
    pub values: &'a [f64],
}

impl fmt::Display for VecFmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.label)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v:.6}")?;
        }
        f.write_str("}")
    }
}
