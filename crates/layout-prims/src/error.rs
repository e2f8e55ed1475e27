//! Error type shared by all primitives.

use std::fmt;

/// Rejected inputs. Each variant is a caller bug, never a numeric outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrimError {
    /// Bounded integer draw with an upper bound `n <= 1`.
    BoundTooSmall { n: usize },
    /// Two vector operands of different length.
    LengthMismatch { left: usize, right: usize },
    /// A buffer holds fewer values than the call needs.
    BufferTooShort { need: usize, have: usize },
    /// A point set declared with `dim == 0`.
    ZeroDimension,
    /// The operation needs at least `need` coordinates per point.
    DimensionTooSmall { dim: usize, need: usize },
    /// Point or gather index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for PrimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundTooSmall { n } => {
                write!(f, "bounded draw needs an upper bound > 1, got {n}")
            }
            Self::LengthMismatch { left, right } => {
                write!(f, "vector length mismatch: {left} vs {right}")
            }
            Self::BufferTooShort { need, have } => {
                write!(f, "buffer too short: need {need} values, have {have}")
            }
            Self::ZeroDimension => write!(f, "point dimension must be > 0"),
            Self::DimensionTooSmall { dim, need } => {
                write!(f, "point dimension {dim} too small, need at least {need}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for PrimError {}

#[inline]
pub(crate) fn check_same_len(left: usize, right: usize) -> Result<(), PrimError> {
    if left != right {
        return Err(PrimError::LengthMismatch { left, right });
    }
    Ok(())
}
