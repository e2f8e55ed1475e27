//! Tuning constants and small configuration structs.
//!
//! Policy
//! - Defaults are fixed constants so results stay reproducible across builds.
//!   Callers that need another floor pass a `DistanceCfg` explicitly.

/// Floor applied by `distance_floored`. Keeps distances usable as
/// denominators and as `ln` arguments in stress-style solvers.
pub const MIN_DIST: f64 = 1e-15;

/// Seed used by `RandomStream::default()`.
pub const DEFAULT_SEED: u64 = 1;

/// Distance configuration (floor for the clamped variant).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceCfg {
    pub min_dist: f64,
}

impl Default for DistanceCfg {
    fn default() -> Self {
        Self { min_dist: MIN_DIST }
    }
}
